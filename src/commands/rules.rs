use std::fmt::Write as _;
use std::path::Path;

use crate::cli::{Cli, RulesArgs};
use crate::error::Result;
use crate::output::print_error;
use crate::rules::RuleSpec;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::{CheckOptions, build_engine, load_config};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(listing) => {
            print!("{listing}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// The rules a `check` with the same config and skips would run.
///
/// # Errors
/// Returns an error if the config cannot be loaded or a skip is invalid.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<String> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let mut options = CheckOptions::from_config(&config);
    options.add_skips(&args.skip);
    options.quick |= args.quick;

    // Nothing is hashed, so any root will do.
    let (engine, _) = build_engine(&options, Path::new("."))?;
    Ok(format_rule_list(&engine.validators()))
}

/// One `  name (Criticality)` line per rule under a heading.
#[must_use]
pub fn format_rule_list(rules: &[&RuleSpec]) -> String {
    let mut out = String::from("Validators to run:\n");
    for spec in rules {
        let _ = writeln!(out, "  {} ({})", spec.name(), spec.criticality());
    }
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
