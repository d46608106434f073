use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checksum::Algorithm;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dark-guard")]
#[command(author, version, about = "Audit a directory tree before it goes into the dark archive")]
#[command(long_about = "Validates every file and folder under a root against naming, \
    type and content rules, and reports which entries would cause trouble in the archive.\n\n\
    Exit codes:\n  \
    0 - No failures\n  \
    1 - One or more entries failed validation\n  \
    2 - Usage, configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and non-essential messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every entry under a directory
    Check(CheckArgs),

    /// List the rules a check would run, in order
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Directory to validate
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip a rule (repeatable). Critical rules cannot be skipped.
    #[arg(short, long = "skip", value_name = "RULE")]
    pub skip: Vec<String>,

    /// Skip low-criticality rules and content checksumming
    #[arg(long)]
    pub quick: bool,

    /// Fail entries whose relative path is longer than N bytes
    #[arg(long, value_name = "N")]
    pub path_limit: Option<usize>,

    /// Checksum every file and flag duplicated content (default)
    #[arg(long, overrides_with = "no_checksum")]
    pub checksum: bool,

    /// Do not checksum files
    #[arg(long)]
    pub no_checksum: bool,

    /// Digest algorithm for checksums [possible values: sha256, sha512]
    #[arg(long)]
    pub algorithm: Option<Algorithm>,

    /// Write every file's digest to this file
    #[arg(long, value_name = "FILE")]
    pub sha_output: Option<PathBuf>,

    /// Output format [possible values: tsv, text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CheckArgs {
    /// Tri-state checksum flag: `None` leaves the config value alone.
    #[must_use]
    pub const fn checksum_override(&self) -> Option<bool> {
        if self.no_checksum {
            Some(false)
        } else if self.checksum {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip a rule (repeatable)
    #[arg(short, long = "skip", value_name = "RULE")]
    pub skip: Vec<String>,

    /// Show only the rules a quick check runs
    #[arg(long)]
    pub quick: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".dark-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
