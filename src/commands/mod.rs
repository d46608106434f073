pub mod check;
pub mod init;
pub mod rules;

pub use check::{CheckOptions, ProgressTraverser, build_engine, run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rule_list, run_rules, run_rules_impl};

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the selected config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}
