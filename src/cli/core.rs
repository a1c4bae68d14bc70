use crate::cli;
use nblists::{ConfigOptions, Filters};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Parse a KEY=VALUE filter argument
--------------------------------------------------------------------------------------*/

pub fn parse_filter(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing filter key in `{arg}`")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, found `{arg}`")),
    }
}

/*--------------------------------------------------------------------------------------
  Build configuration options from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_options(args: &cli::Args) -> ConfigOptions {
    ConfigOptions {
        url: args.url.clone(),
        token: args.token.clone(),
        lists_path: args.lists_path.clone(),
        // Unset without the flag so NETBOX_LISTS_ALLOW_EMPTY still applies
        allow_empty: args.allow_empty,
    }
}

/*--------------------------------------------------------------------------------------
  Build NetBox Lists filters from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_filters(args: &cli::Args) -> Filters {
    let mut filters = Filters::new();
    for (key, value) in &args.filters {
        filters.push(key.as_str(), value.as_str());
    }
    filters
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
