use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checksum::Algorithm;
use crate::output::OutputFormat;

/// Contents of `.dark-guard.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rules: RulesConfig,
    pub checksum: ChecksumConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Rules to skip; merged with `--skip`.
    pub skip: Vec<String>,

    /// Only run important rules and no content hashing.
    pub quick: bool,

    /// Registers `path-limit` with this maximum when set.
    pub path_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksumConfig {
    /// Hash every regular file and flag duplicated content.
    pub enabled: bool,

    pub algorithm: Algorithm,

    /// Write `<digest>  <path>` lines for every hashed file here.
    pub manifest: Option<PathBuf>,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            algorithm: Algorithm::default(),
            manifest: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
