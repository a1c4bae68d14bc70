use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Query IP address and prefix lists from NetBox.", long_about = None)]
pub struct Args {
    /// NetBox lists endpoint(s), for example `ip-addresses`, `prefixes` or `tags/<tag-slug>`
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// URL of the NetBox instance [env: NETBOX_API, NETBOX_URL]
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// NetBox API token [env: NETBOX_TOKEN, NETBOX_API_TOKEN]
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Path to the NetBox Lists API root, appended to the URL [env: NETBOX_LISTS_PATH]
    #[arg(long)]
    pub lists_path: Option<String>,

    /// Do not fail when an endpoint returns an empty list; `--allow-empty=false` overrides the
    /// environment [env: NETBOX_LISTS_ALLOW_EMPTY]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_empty: Option<bool>,

    /// Filter passed to NetBox lists; repeat a key to filter on more than one value
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE", value_parser = crate::cli::parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::List)]
    pub output: OutputFormat,

    /// Save the results to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line
    List,
    /// JSON list
    Json,
    /// Table with a summary
    Table,
    /// IP networks in network mask format (n.n.n.n m.m.m.m)
    Netmask,
}
