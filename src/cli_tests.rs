use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn check_args(args: &[&str]) -> CheckArgs {
    match parse(args).command {
        Commands::Check(check) => check,
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn check_requires_a_path() {
    assert!(Cli::try_parse_from(["dark-guard", "check"]).is_err());
}

#[test]
fn check_defaults() {
    let args = check_args(&["dark-guard", "check", "/archive"]);

    assert_eq!(args.path, PathBuf::from("/archive"));
    assert!(args.skip.is_empty());
    assert!(!args.quick);
    assert_eq!(args.path_limit, None);
    assert_eq!(args.checksum_override(), None);
    assert_eq!(args.algorithm, None);
    assert_eq!(args.format, None);
    assert_eq!(args.output, None);
}

#[test]
fn skip_is_repeatable_in_short_and_long_form() {
    let args = check_args(&["dark-guard", "check", ".", "-s", "no-utf8", "--skip", "no-spaces"]);

    assert_eq!(args.skip, vec!["no-utf8", "no-spaces"]);
}

#[test]
fn check_parses_every_option() {
    let args = check_args(&[
        "dark-guard",
        "check",
        "/archive",
        "--quick",
        "--path-limit",
        "240",
        "--algorithm",
        "sha512",
        "--sha-output",
        "sums.txt",
        "-f",
        "json",
        "-o",
        "report.json",
    ]);

    assert!(args.quick);
    assert_eq!(args.path_limit, Some(240));
    assert_eq!(args.algorithm, Some(Algorithm::Sha512));
    assert_eq!(args.sha_output, Some(PathBuf::from("sums.txt")));
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
}

#[test]
fn invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["dark-guard", "check", ".", "-f", "sarif"]).is_err());
}

#[test]
fn last_checksum_flag_wins() {
    let off = check_args(&["dark-guard", "check", ".", "--checksum", "--no-checksum"]);
    let on = check_args(&["dark-guard", "check", ".", "--no-checksum", "--checksum"]);

    assert_eq!(off.checksum_override(), Some(false));
    assert_eq!(on.checksum_override(), Some(true));
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let cli = parse(&["dark-guard", "check", ".", "-vv", "-q", "--color", "never", "--no-config"]);

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn rules_and_init_subcommands() {
    let cli = parse(&["dark-guard", "rules", "--quick", "-s", "no-spaces"]);
    assert!(matches!(cli.command, Commands::Rules(ref r) if r.quick && r.skip == ["no-spaces"]));

    let cli = parse(&["dark-guard", "init"]);
    assert!(
        matches!(cli.command, Commands::Init(ref i) if i.output == PathBuf::from(".dark-guard.toml") && !i.force)
    );
}
