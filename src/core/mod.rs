/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod config;
pub mod errors;
pub mod filter;
pub mod response;
pub mod url;
