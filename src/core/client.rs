use crate::core::config::{self, Config, ConfigOptions, RedactedVariables, Variables};
use crate::core::errors::{Error, Result};
use crate::core::filter::Filters;
use crate::core::response::parse_list;
use crate::core::url::{lists_url, term_url, validate_terms};
use log::{info, trace};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ resolves the configuration and returns the values of every
/// requested NetBox Lists endpoint, concatenated in term order.
///
/// Options missing from `options` are looked up in `variables`, then in the environment
/// (`NETBOX_API`/`NETBOX_URL`, `NETBOX_TOKEN`/`NETBOX_API_TOKEN`, `NETBOX_LISTS_PATH`,
/// `NETBOX_LISTS_ALLOW_EMPTY`).
///
/// ```no_run
/// let options = nblists::ConfigOptions {
///     url: Some("https://netbox.example.com".into()),
///     token: Some("0123456789abcdef".into()),
///     ..Default::default()
/// };
///
/// let mut filters = nblists::Filters::new();
/// filters.insert("tag", "special");
///
/// let ips = nblists::lookup(&["ip-addresses"], &options, &nblists::Variables::new(), &filters)?;
/// # Ok::<(), nblists::Error>(())
/// ```
pub fn lookup<S: AsRef<str>>(
    terms: &[S],
    options: &ConfigOptions,
    variables: &Variables,
    filters: &Filters,
) -> Result<Vec<Value>> {
    ClientBuilder::new()
        .options(options.clone())
        .variables(variables.clone())
        .build()?
        .get_lists(terms, filters)
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct. Options that are not set on the builder are resolved from
/// the builder's variables, then from environment variables, then from their defaults when
/// [ClientBuilder::build] is called.
///
/// ```
/// let client = nblists::ClientBuilder::new()
///     .url("https://netbox.example.com")
///     .token("0123456789abcdef")
///     .allow_empty(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(client.url(), "https://netbox.example.com/");
/// assert!(client.allow_empty());
/// ```
#[derive(Clone, Default)]
pub struct ClientBuilder {
    options: ConfigOptions,
    variables: Variables,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("options", &self.options)
            .field("variables", &RedactedVariables(&self.variables))
            .finish()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the NetBox instance running the Lists plugin.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.options.url = Some(url.to_string());
        self
    }

    /// Set the NetBox API token.
    pub fn token(&mut self, token: &str) -> &mut Self {
        self.options.token = Some(token.to_string());
        self
    }

    /// Set the path to the Lists API root, appended to the URL; defaults to
    /// `/api/plugins/lists/`.
    pub fn lists_path(&mut self, lists_path: &str) -> &mut Self {
        self.options.lists_path = Some(lists_path.to_string());
        self
    }

    /// Allow endpoints to return empty lists; defaults to `false`, where an
    /// empty list fails the lookup.
    pub fn allow_empty(&mut self, allow_empty: bool) -> &mut Self {
        self.options.allow_empty = Some(allow_empty);
        self
    }

    /// Replace all call-time options at once.
    pub fn options(&mut self, options: ConfigOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Set the variable context consulted for options not set directly.
    pub fn variables(&mut self, variables: Variables) -> &mut Self {
        self.variables = variables;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<Client> {
        let config = config::resolve(&self.options, &self.variables)?;
        Client::from_config(config)
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for the NetBox Lists API. Each term is requested in order, one at a time, and the
/// returned lists are concatenated. Any failure fails the whole request.
///
/// ```no_run
/// let client = nblists::Client::builder()
///     .url("https://netbox.example.com")
///     .build()?;
///
/// let mut filters = nblists::Filters::new();
/// filters.insert("role", ["data", "voice"]);
///
/// let prefixes = client.get_lists(&["prefixes"], &filters)?;
/// # Ok::<(), nblists::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: reqwest::blocking::Client,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Client {
    /// Create a client configured only from environment variables and defaults.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from an already resolved configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("unable to build HTTP client: {error}")))?;

        Ok(Self { config, http })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the URL of the NetBox instance.
    pub fn url(&self) -> &str {
        self.config.url.as_str()
    }

    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    /// Get the path to the Lists API root. Defaults to `/api/plugins/lists/`.
    ///
    /// ```
    /// let client = nblists::Client::from_config(
    ///     nblists::Config::new("https://netbox.example.com").unwrap(),
    /// ).unwrap();
    /// assert_eq!(client.lists_path(), "/api/plugins/lists/");
    /// ```
    pub fn lists_path(&self) -> &str {
        &self.config.lists_path
    }

    /// Whether endpoints may return empty lists. Defaults to `false`.
    pub fn allow_empty(&self) -> bool {
        self.config.allow_empty
    }

    /*-------------------------------------------------------------------------
      Get Lists
    -------------------------------------------------------------------------*/

    /// Request every term's list with `filters` applied and return the values concatenated in
    /// term order. All terms are validated before the first request is made.
    pub fn get_lists<S: AsRef<str>>(&self, terms: &[S], filters: &Filters) -> Result<Vec<Value>> {
        validate_terms(terms)?;

        let lists_url = lists_url(&self.config.url, &self.config.lists_path)?;

        let mut values = Vec::new();
        for term in terms.iter().map(AsRef::as_ref) {
            let url = term_url(&lists_url, term, filters)?;
            trace!("NetBox list url: {}", url);

            let body = self.get_json_from_url(&url)?;
            let list = parse_list(url.as_str(), &body, self.config.allow_empty)?;
            info!("Got {} value(s) from {}", list.len(), url);

            values.extend(list);
        }

        Ok(values)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// GET the response body from a NetBox Lists URL.
    fn get_json_from_url(&self, url: &Url) -> Result<String> {
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.config.token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }

        request
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| Error::Request {
                url: url.to_string(),
                source,
            })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
