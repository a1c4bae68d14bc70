use crate::core::errors::{Error, Result};
use crate::core::filter::Filters;
use reqwest::Url;

/*-------------------------------------------------------------------------------------------------
  NetBox Lists URLs
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Term Validation
--------------------------------------------------------------------------------------*/

/// Reject the whole lookup when any term is empty or names the lists root itself (`/`, `//`, ...).
pub fn validate_terms<S: AsRef<str>>(terms: &[S]) -> Result<()> {
    for term in terms.iter().map(AsRef::as_ref) {
        if term.is_empty() {
            return Err(Error::Terms("Received empty term".into()));
        }
        if term.trim_end_matches('/').is_empty() {
            return Err(Error::Terms(format!(
                "term {term:?} resolves to the lists root"
            )));
        }
    }
    Ok(())
}

/*--------------------------------------------------------------------------------------
  URL Construction
--------------------------------------------------------------------------------------*/

/// Join the NetBox URL and the lists path into the Lists API root URL.
pub fn lists_url(base: &Url, lists_path: &str) -> Result<Url> {
    base.join(lists_path).map_err(|error| {
        Error::Config(format!(
            "invalid lists path {lists_path:?} for {base}: {error}"
        ))
    })
}

/// Build the request URL for one term. The term always ends in a single `/` so NetBox does not
/// answer with a redirect; filters become the query string.
pub fn term_url(lists_url: &Url, term: &str, filters: &Filters) -> Result<Url> {
    let term = format!("{}/", term.trim_end_matches('/'));
    let mut url = lists_url
        .join(&term)
        .map_err(|error| Error::Terms(format!("invalid term {term:?}: {error}")))?;

    if !filters.is_empty() {
        url.query_pairs_mut().extend_pairs(filters.pairs());
    }

    Ok(url)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
