//! Configuration: typed entries with defaults, set from an optional TOML file then the command line

use super::*;

mod build_config;
mod config_builder;
mod config_entries;
mod load_toml;
mod master_config;
mod parse_args;
#[cfg(test)]
mod tests;

pub use build_config::build_config;
pub use build_config::build_config_with;
pub use master_config::MasterConfig;

use config_builder::*;
use config_entries::*;
use load_toml::*;
use parse_args::*;
