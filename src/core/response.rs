use crate::core::errors::{Error, Result};
use serde_json::Value;

/*-------------------------------------------------------------------------------------------------
  Parse NetBox Lists Responses
-------------------------------------------------------------------------------------------------*/

/// Parse a NetBox Lists response body into its list of values. The body must be a JSON list, and
/// must not be empty unless `allow_empty` is set.
pub fn parse_list(url: &str, body: &str, allow_empty: bool) -> Result<Vec<Value>> {
    let parsed: Value = serde_json::from_str(body).map_err(|error| Error::Parse {
        url: url.to_string(),
        reason: error.to_string(),
    })?;

    let Value::Array(values) = parsed else {
        return Err(Error::Parse {
            url: url.to_string(),
            reason: "response was not a list".into(),
        });
    };

    if values.is_empty() && !allow_empty {
        return Err(Error::EmptyList {
            url: url.to_string(),
        });
    }

    Ok(values)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
