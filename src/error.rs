use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DarkGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read path {path}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a valid path to validate")]
    NotADirectory(PathBuf),

    #[error("Rule {0:?} is already registered")]
    DuplicateRule(String),

    #[error("Invalid --skip value(s): {}", .0.join(", "))]
    InvalidSkip(Vec<String>),

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DarkGuardError {
    /// Short category name used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidRoot { .. } | Self::NotADirectory(_) => "Path",
            Self::DuplicateRule(_) => "Registry",
            Self::InvalidSkip(_) | Self::Usage(_) => "Usage",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Suggestion printed under the error, when there is an obvious fix.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidSkip(_) => {
                Some("Run `dark-guard rules` to list rule names; critical rules cannot be skipped")
            }
            Self::NotADirectory(_) | Self::InvalidRoot { .. } => {
                Some("Pass the directory whose contents should be audited")
            }
            Self::TomlParse(_) => Some("Check the configuration file syntax"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DarkGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
