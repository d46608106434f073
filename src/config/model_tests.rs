use super::*;

#[test]
fn defaults_enable_checksums_and_tsv() {
    let config = Config::default();

    assert!(config.rules.skip.is_empty());
    assert!(!config.rules.quick);
    assert_eq!(config.rules.path_limit, None);
    assert!(config.checksum.enabled);
    assert_eq!(config.checksum.algorithm, Algorithm::Sha256);
    assert_eq!(config.checksum.manifest, None);
    assert_eq!(config.output.format, OutputFormat::Tsv);
}

#[test]
fn empty_document_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_document_parses() {
    let config: Config = toml::from_str(
        r#"
[rules]
skip = ["no-utf8", "has-extension"]
quick = true
path_limit = 240

[checksum]
enabled = false
algorithm = "sha512"
manifest = "sums.txt"

[output]
format = "json"
"#,
    )
    .unwrap();

    assert_eq!(config.rules.skip, vec!["no-utf8", "has-extension"]);
    assert!(config.rules.quick);
    assert_eq!(config.rules.path_limit, Some(240));
    assert!(!config.checksum.enabled);
    assert_eq!(config.checksum.algorithm, Algorithm::Sha512);
    assert_eq!(config.checksum.manifest, Some(PathBuf::from("sums.txt")));
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[checksum]\nmanifest = \"out.sha\"\n").unwrap();

    assert!(config.checksum.enabled);
    assert_eq!(config.checksum.algorithm, Algorithm::Sha256);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<Config>("[rules]\nskipp = []\n").is_err());
    assert!(toml::from_str::<Config>("[scanner]\ngitignore = true\n").is_err());
}

#[test]
fn unknown_algorithm_is_rejected() {
    assert!(toml::from_str::<Config>("[checksum]\nalgorithm = \"md5\"\n").is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.rules.skip.push("no-spaces".to_string());
    config.rules.path_limit = Some(100);

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}
