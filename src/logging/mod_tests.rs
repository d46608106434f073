use super::*;

#[test]
fn verbosity_from_flags_default() {
    assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
}

#[test]
fn verbosity_from_flags_quiet() {
    assert_eq!(Verbosity::from_flags(0, true), Verbosity::Quiet);
}

#[test]
fn verbosity_counts_repeated_verbose_flags() {
    assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
    assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
    assert_eq!(Verbosity::from_flags(5, false), Verbosity::Debug);
}

#[test]
fn verbose_wins_over_quiet() {
    assert_eq!(Verbosity::from_flags(1, true), Verbosity::Verbose);
}

#[test]
fn default_level_mapping() {
    assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
    assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
    assert_eq!(Verbosity::Verbose.default_level(), Level::INFO);
    assert_eq!(Verbosity::Debug.default_level(), Level::DEBUG);
}

#[test]
fn default_directive_scopes_verbose_output_to_our_targets() {
    assert_eq!(default_directive(Verbosity::Normal), "WARN");
    assert_eq!(default_directive(Verbosity::Verbose), "WARN,dark_guard=INFO");
    assert_eq!(default_directive(Verbosity::Debug), "WARN,dark_guard=DEBUG");
}

#[test]
fn build_env_filter_produces_valid_filter() {
    let _filter = build_env_filter(Verbosity::Normal);
    let _filter = build_env_filter(Verbosity::Debug);
    let _filter = build_env_filter(Verbosity::Quiet);
}
