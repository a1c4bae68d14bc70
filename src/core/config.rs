use crate::core::errors::{Error, Result};
use log::{info, warn};
use reqwest::Url;
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Configuration
-------------------------------------------------------------------------------------------------*/

/// Default path to the NetBox Lists API root, appended to the NetBox URL.
pub const DEFAULT_LISTS_PATH: &str = "/api/plugins/lists/";

/// Caller-supplied variable context (for example, task or inventory variables) consulted when an
/// option is not passed directly.
pub type Variables = BTreeMap<String, Value>;

/*--------------------------------------------------------------------------------------
  Option Sources
--------------------------------------------------------------------------------------*/

/// Where an option may be found besides the call itself. Names are tried in order; the first
/// usable value wins.
struct OptionSource {
    name: &'static str,
    variables: &'static [&'static str],
    env_vars: &'static [&'static str],
}

const URL: OptionSource = OptionSource {
    name: "url",
    variables: &["netbox_url", "netbox_api"],
    env_vars: &["NETBOX_API", "NETBOX_URL"],
};

const TOKEN: OptionSource = OptionSource {
    name: "token",
    variables: &["netbox_token", "netbox_api_token"],
    env_vars: &["NETBOX_TOKEN", "NETBOX_API_TOKEN"],
};

const LISTS_PATH: OptionSource = OptionSource {
    name: "lists_path",
    variables: &["netbox_lists_path"],
    env_vars: &["NETBOX_LISTS_PATH"],
};

const ALLOW_EMPTY: OptionSource = OptionSource {
    name: "allow_empty",
    variables: &["netbox_lists_allow_empty"],
    env_vars: &["NETBOX_LISTS_ALLOW_EMPTY"],
};

/*--------------------------------------------------------------------------------------
  Config Options
--------------------------------------------------------------------------------------*/

/// Options passed directly by the caller. Any option left as `None` is resolved from the variable
/// context, then the environment, then its default.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    /// URL of the NetBox instance running the Lists plugin.
    pub url: Option<String>,
    /// NetBox API token; sent as `Authorization: Token <token>`.
    pub token: Option<String>,
    /// Path to the Lists API root, appended to `url`.
    pub lists_path: Option<String>,
    /// When `false`, an empty list from any endpoint is an error.
    pub allow_empty: Option<bool>,
}

impl fmt::Debug for ConfigOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOptions")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("lists_path", &self.lists_path)
            .field("allow_empty", &self.allow_empty)
            .finish()
    }
}

/*--------------------------------------------------------------------------------------
  Resolved Configuration
--------------------------------------------------------------------------------------*/

/// Fully resolved configuration for a single lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub token: Option<String>,
    pub lists_path: String,
    pub allow_empty: bool,
}

impl Config {
    /// Create a configuration with the default lists path, no token, and empty lists disallowed.
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            url: parse_url(url)?,
            token: None,
            lists_path: DEFAULT_LISTS_PATH.to_string(),
            allow_empty: false,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("lists_path", &self.lists_path)
            .field("allow_empty", &self.allow_empty)
            .finish()
    }
}

/*--------------------------------------------------------------------------------------
  Redacted Variables
--------------------------------------------------------------------------------------*/

/// `Debug` view of a variable context with token variables redacted.
pub(crate) struct RedactedVariables<'v>(pub &'v Variables);

impl fmt::Debug for RedactedVariables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| {
                let value: &dyn fmt::Debug = if TOKEN.variables.contains(&name.as_str()) {
                    &"<redacted>"
                } else {
                    value
                };
                (name, value)
            }))
            .finish()
    }
}

/*-------------------------------------------------------------------------------------------------
  Resolution
-------------------------------------------------------------------------------------------------*/

/// Resolve the configuration from the call-time options, the variable context, and the process
/// environment, in that order of precedence.
pub fn resolve(options: &ConfigOptions, variables: &Variables) -> Result<Config> {
    resolve_with_env(options, variables, |name| env::var(name).ok())
}

/// Resolve the configuration using `env` to look up environment variables.
pub fn resolve_with_env<F>(options: &ConfigOptions, variables: &Variables, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let url: String = resolve_option(&URL, options.url.clone(), variables, &env)
        .ok_or_else(|| Error::Config("a NetBox URL is required; set `url` or NETBOX_API".into()))?;

    let token: Option<String> = resolve_option(&TOKEN, options.token.clone(), variables, &env);

    let lists_path: String =
        resolve_option(&LISTS_PATH, options.lists_path.clone(), variables, &env)
            .unwrap_or_else(|| DEFAULT_LISTS_PATH.to_string());

    let allow_empty: bool =
        resolve_option(&ALLOW_EMPTY, options.allow_empty, variables, &env).unwrap_or(false);

    Ok(Config {
        url: parse_url(&url)?,
        token,
        lists_path,
        allow_empty,
    })
}

fn resolve_option<T, F>(
    source: &OptionSource,
    direct: Option<T>,
    variables: &Variables,
    env: &F,
) -> Option<T>
where
    T: OptionValue,
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = direct.filter(T::is_set) {
        return Some(value);
    }

    for &name in source.variables {
        let Some(value) = variables.get(name) else {
            continue;
        };
        match read_variable::<T>(value) {
            SourceValue::Found(found) => {
                info!("Using {} from variable `{}`", source.name, name);
                return Some(found);
            }
            SourceValue::Invalid => {
                warn!("Invalid {} in variable `{}`: {}", source.name, name, value)
            }
            SourceValue::Unset => {}
        }
    }

    for &env_var in source.env_vars {
        let Some(value) = env(env_var) else {
            continue;
        };
        match read_env::<T>(&value) {
            SourceValue::Found(found) => {
                info!("Using {} from {}", source.name, env_var);
                return Some(found);
            }
            SourceValue::Invalid => warn!("Invalid {}: {:?}", env_var, value),
            SourceValue::Unset => {}
        }
    }

    None
}

/// What a single variable or environment variable contributes to an option.
#[derive(Debug, PartialEq, Eq)]
enum SourceValue<T> {
    /// Empty or null; the next source is tried without a warning.
    Unset,
    Invalid,
    Found(T),
}

fn read_variable<T: OptionValue>(value: &Value) -> SourceValue<T> {
    match value {
        Value::Null => SourceValue::Unset,
        Value::String(raw) if raw.is_empty() => SourceValue::Unset,
        value => T::from_variable(value)
            .filter(T::is_set)
            .map_or(SourceValue::Invalid, SourceValue::Found),
    }
}

fn read_env<T: OptionValue>(value: &str) -> SourceValue<T> {
    if value.is_empty() {
        return SourceValue::Unset;
    }
    T::from_env(value)
        .filter(T::is_set)
        .map_or(SourceValue::Invalid, SourceValue::Found)
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|error| Error::Config(format!("invalid NetBox URL {url:?}: {error}")))
}

/*-------------------------------------------------------------------------------------------------
  Option Values
-------------------------------------------------------------------------------------------------*/

/// Conversion from the untyped sources (variables and environment variables) to a typed option.
trait OptionValue: Sized {
    fn from_variable(value: &Value) -> Option<Self>;
    fn from_env(value: &str) -> Option<Self>;

    /// Unset-equivalent values fall through to the next source.
    fn is_set(&self) -> bool {
        true
    }
}

impl OptionValue for String {
    fn from_variable(value: &Value) -> Option<Self> {
        match value {
            Value::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn from_env(value: &str) -> Option<Self> {
        Some(value.to_string())
    }

    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl OptionValue for bool {
    fn from_variable(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(*value),
            Value::String(value) => parse_bool(value),
            Value::Number(value) => match value.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            _ => None,
        }
    }

    fn from_env(value: &str) -> Option<Self> {
        parse_bool(value)
    }
}

/// Parse a boolean the way automation tooling commonly spells them.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "y" | "t" | "1" => Some(true),
        "false" | "no" | "off" | "n" | "f" | "0" => Some(false),
        _ => None,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
