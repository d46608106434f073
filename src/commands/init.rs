use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{DarkGuardError, Result};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DarkGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    tracing::info!(
        target: "dark_guard::commands::init",
        path = %output_path.display(),
        "wrote config"
    );
    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# dark-guard configuration file
# Looked up as ./.dark-guard.toml, then config.toml in the user config directory.

[rules]
# Rules to skip on every run; --skip adds to this list.
# Critical rules (broken-file, valid-windows-filename) cannot be skipped.
skip = []

# Only run important rules and skip content checksums (same as --quick)
quick = false

# Fail entries whose relative path is longer than this many bytes
# path_limit = 240

[checksum]
# Hash every regular file and flag duplicated content (default: true)
enabled = true

# Digest algorithm: "sha256" or "sha512"
algorithm = "sha256"

# Write "<digest>  <path>" for every hashed file (same as --sha-output)
# manifest = "checksums.txt"

[output]
# Report format: "tsv", "text" or "json"
format = "tsv"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
