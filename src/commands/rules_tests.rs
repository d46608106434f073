use clap::Parser;

use super::*;
use crate::cli::Commands;
use crate::rules::{Criticality, NO_DUPED_CONTENT};

fn parse_rules(args: &[&str]) -> (Cli, RulesArgs) {
    let mut argv = vec!["dark-guard", "--no-config", "rules"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(&argv).unwrap();
    let Commands::Rules(rules) = Cli::try_parse_from(&argv).unwrap().command else {
        panic!("expected rules command");
    };
    (cli, rules)
}

#[test]
fn format_rule_list_prints_heading_and_tiers() {
    let specs = [
        RuleSpec::new("broken-file").with_criticality(Criticality::Critical),
        RuleSpec::new("no-spaces").with_criticality(Criticality::Low),
    ];
    let refs: Vec<&RuleSpec> = specs.iter().collect();

    assert_eq!(
        format_rule_list(&refs),
        "Validators to run:\n  broken-file (Critical)\n  no-spaces (Low)\n"
    );
}

#[test]
fn default_listing_starts_with_critical_rules_and_includes_dedup() {
    let (cli, args) = parse_rules(&[]);
    let listing = run_rules_impl(&args, &cli).unwrap();

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], "Validators to run:");
    assert_eq!(lines[1], "  broken-file (Critical)");
    assert!(listing.contains(&format!("  {NO_DUPED_CONTENT} (High)")));
}

#[test]
fn skipped_rules_are_left_out() {
    let (cli, args) = parse_rules(&["-s", "no-spaces"]);
    let listing = run_rules_impl(&args, &cli).unwrap();

    assert!(!listing.contains("no-spaces"));
}

#[test]
fn quick_listing_keeps_normal_rules_and_drops_dedup() {
    let (cli, args) = parse_rules(&["--quick"]);
    let listing = run_rules_impl(&args, &cli).unwrap();

    assert!(!listing.contains("(Low)"));
    assert!(listing.contains("  no-extraneous-files (Normal)"));
    assert!(!listing.contains(NO_DUPED_CONTENT));
}

#[test]
fn invalid_skip_fails() {
    let (cli, args) = parse_rules(&["-s", "bogus"]);
    assert!(run_rules_impl(&args, &cli).is_err());
    assert_eq!(run_rules(&args, &cli), EXIT_CONFIG_ERROR);
}
