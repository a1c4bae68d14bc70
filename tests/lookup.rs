mod common;

use common::{closed_address, MockServer};
use nblists::{Client, ConfigOptions, Error, Filters, Value, Variables};
use serde_json::json;

/*-------------------------------------------------------------------------------------------------
  NetBox Lists Lookup Tests
-------------------------------------------------------------------------------------------------*/

fn client(url: &str, allow_empty: bool) -> Client {
    Client::builder()
        .url(url)
        .allow_empty(allow_empty)
        .build()
        .unwrap()
}

/*--------------------------------------------------------------------------------------
  Concatenation
--------------------------------------------------------------------------------------*/

#[test]
fn lookup_concatenates_terms_in_order() {
    let server = MockServer::start(&[
        ("/api/plugins/lists/ip-addresses/", 200, r#"["10.0.0.1/32"]"#),
        ("/api/plugins/lists/prefixes/", 200, r#"["10.0.0.0/24"]"#),
    ]);

    let values = client(&server.url(), false)
        .get_lists(&["ip-addresses", "prefixes"], &Filters::new())
        .unwrap();
    assert_eq!(values, [json!("10.0.0.1/32"), json!("10.0.0.0/24")]);

    let paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        ["/api/plugins/lists/ip-addresses/", "/api/plugins/lists/prefixes/"]
    );
}

#[test]
fn lookup_keeps_duplicates() {
    let server = MockServer::start(&[(
        "/api/plugins/lists/prefixes/",
        200,
        r#"["10.0.0.0/24", "10.0.1.0/24"]"#,
    )]);

    let values = client(&server.url(), false)
        .get_lists(&["prefixes", "prefixes/"], &Filters::new())
        .unwrap();
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], values[2]);
}

#[test]
fn lookup_function_with_options() {
    let server = MockServer::start(&[("/netbox/lists/tags/special/", 200, r#"["192.0.2.1/32"]"#)]);

    let options = ConfigOptions {
        url: Some(server.url()),
        lists_path: Some("/netbox/lists/".into()),
        allow_empty: Some(false),
        ..ConfigOptions::default()
    };

    let values =
        nblists::lookup(&["tags/special"], &options, &Variables::new(), &Filters::new()).unwrap();
    assert_eq!(values, [json!("192.0.2.1/32")]);
}

#[test]
fn lookup_function_with_variables() {
    let server = MockServer::start(&[("/api/plugins/lists/devices/", 200, r#"["192.0.2.10"]"#)]);

    let variables: Variables = [
        ("netbox_url".to_string(), json!(server.url())),
        ("netbox_token".to_string(), json!("from-variables")),
    ]
    .into_iter()
    .collect();

    let values =
        nblists::lookup(&["devices"], &ConfigOptions::default(), &variables, &Filters::new())
            .unwrap();
    assert_eq!(values, [json!("192.0.2.10")]);
    assert_eq!(
        server.requests()[0].authorization.as_deref(),
        Some("Token from-variables")
    );
}

/*--------------------------------------------------------------------------------------
  Request Headers and Filters
--------------------------------------------------------------------------------------*/

#[test]
fn request_headers() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, r#"["10.0.0.0/8"]"#)]);

    Client::builder()
        .url(&server.url())
        .token("0123456789abcdef")
        .build()
        .unwrap()
        .get_lists(&["prefixes"], &Filters::new())
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert_eq!(
        request.authorization.as_deref(),
        Some("Token 0123456789abcdef")
    );
    assert_eq!(request.query, None);
}

#[test]
fn request_filters() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, r#"["10.0.0.0/8"]"#)]);

    let mut filters = Filters::new();
    filters
        .insert("role", ["data", "voice", "mgmt"])
        .insert("tag", "special");

    client(&server.url(), false)
        .get_lists(&["prefixes"], &filters)
        .unwrap();

    let query = server.requests()[0].query.clone().unwrap();
    assert_eq!(query, "role=data&role=voice&role=mgmt&tag=special");
    assert_eq!(query.matches("role=").count(), 3);
}

/*--------------------------------------------------------------------------------------
  Empty Lists
--------------------------------------------------------------------------------------*/

#[test]
fn empty_list_disallowed() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, "[]")]);

    let result = client(&server.url(), false).get_lists(&["prefixes"], &Filters::new());
    match result {
        Err(Error::EmptyList { url }) => {
            assert_eq!(url, format!("{}/api/plugins/lists/prefixes/", server.url()))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_list_allowed() {
    let server = MockServer::start(&[
        ("/api/plugins/lists/prefixes/", 200, "[]"),
        ("/api/plugins/lists/ip-addresses/", 200, r#"["10.0.0.1/32"]"#),
    ]);

    let values = client(&server.url(), true)
        .get_lists(&["prefixes", "ip-addresses"], &Filters::new())
        .unwrap();
    assert_eq!(values, [Value::from("10.0.0.1/32")]);
}

/*--------------------------------------------------------------------------------------
  Failures
--------------------------------------------------------------------------------------*/

#[test]
fn response_not_a_list() {
    let server = MockServer::start(&[(
        "/api/plugins/lists/prefixes/",
        200,
        r#"{"results": ["10.0.0.0/8"]}"#,
    )]);

    for allow_empty in [false, true] {
        let result = client(&server.url(), allow_empty).get_lists(&["prefixes"], &Filters::new());
        assert!(matches!(result, Err(Error::Parse { .. })), "{result:?}");
    }
}

#[test]
fn response_not_json() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, "10.0.0.0/8")]);

    let result = client(&server.url(), false).get_lists(&["prefixes"], &Filters::new());
    assert!(matches!(result, Err(Error::Parse { .. })), "{result:?}");
}

#[test]
fn error_status_is_request_error() {
    let server = MockServer::start(&[]);

    let result = client(&server.url(), false).get_lists(&["missing"], &Filters::new());
    assert!(matches!(result, Err(Error::Request { .. })), "{result:?}");
}

#[test]
fn empty_term_makes_no_requests() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, r#"["10.0.0.0/8"]"#)]);

    let result = client(&server.url(), false).get_lists(&["prefixes", ""], &Filters::new());
    assert!(matches!(result, Err(Error::Terms(_))), "{result:?}");
    assert!(server.requests().is_empty());
}

#[test]
fn transport_failure_on_second_term_returns_no_values() {
    let server = MockServer::start(&[("/api/plugins/lists/prefixes/", 200, r#"["10.0.0.0/8"]"#)]);

    // An absolute term replaces the lists root, pointing the second request at a closed port.
    let unreachable = format!("http://{}/api/plugins/lists/prefixes", closed_address());

    let result = client(&server.url(), false)
        .get_lists(&["prefixes", unreachable.as_str()], &Filters::new());
    match result {
        Err(Error::Request { url, .. }) => assert_eq!(url, format!("{unreachable}/")),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn missing_url_is_config_error() {
    let options = ConfigOptions {
        url: Some(String::new()),
        ..ConfigOptions::default()
    };
    let variables: Variables = [("netbox_url".to_string(), json!(""))].into_iter().collect();

    // Only fails when the environment does not provide a URL either.
    if std::env::var("NETBOX_API").is_err() && std::env::var("NETBOX_URL").is_err() {
        let result = nblists::lookup(&["prefixes"], &options, &variables, &Filters::new());
        assert!(matches!(result, Err(Error::Config(_))), "{result:?}");
    }
}
