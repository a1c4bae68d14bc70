//! _**nblists**_ queries IP addresses and prefixes from the
//! [NetBox Lists](https://github.com/devon-mar/netbox-lists) plugin for
//! [NetBox](https://github.com/netbox-community/netbox) and returns them as one flat list, ready
//! to drive templates, loops and ACLs.
//!
//! ```no_run
//! // Get all NetBox IP addresses tagged `special`
//! let options = nblists::ConfigOptions {
//!     url: Some("https://netbox.example.com".into()),
//!     ..Default::default()
//! };
//! let filters: nblists::Filters = [("tag", "special")].into_iter().collect();
//!
//! let ips = nblists::lookup(&["ip-addresses"], &options, &nblists::Variables::new(), &filters)?;
//! for ip in ips {
//!     println!("{ip}");
//! }
//! # Ok::<(), nblists::Error>(())
//! ```

/*-------------------------------------------------------------------------------------------------
  Primary Interface
-------------------------------------------------------------------------------------------------*/

mod core;

pub use crate::core::client::{lookup, Client, ClientBuilder};
pub use crate::core::config::{
    resolve, resolve_with_env, Config, ConfigOptions, Variables, DEFAULT_LISTS_PATH,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::filter::{FilterValue, Filters};

/*-------------------------------------------------------------------------------------------------
  Re-exports
-------------------------------------------------------------------------------------------------*/

pub use reqwest::Url;
pub use serde_json::Value;
