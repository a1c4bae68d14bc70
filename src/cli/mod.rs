/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Modules
-------------------------------------------------------------------------------------------------*/

mod args;
mod core;

pub mod csv;
pub mod output;

/*--------------------------------------------------------------------------------------
  CLI Module Interface
--------------------------------------------------------------------------------------*/

pub use args::Args;
pub use args::OutputFormat;
pub use self::core::{build_filters, build_options, parse_filter};

// Error type alias used by the CLI, which also reports CSV and I/O errors.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
