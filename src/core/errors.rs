/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors returned while resolving configuration or querying the NetBox Lists API. Every error is
/// fatal to the lookup that produced it; no partial results are returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required option could not be resolved, or a resolved value is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// An endpoint term is empty or resolves to the lists root.
    #[error("invalid term: {0}")]
    Terms(String),

    /// The request could not be completed or the server returned an error status.
    #[error("Error making request to '{url}': {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not JSON, or not a JSON list.
    #[error("Could not parse JSON response for '{url}': {reason}")]
    Parse { url: String, reason: String },

    /// The server returned an empty list and empty lists are not allowed.
    #[error("Got empty list for {url}")]
    EmptyList { url: String },
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}
