use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn init_args(output: std::path::PathBuf, force: bool) -> InitArgs {
    InitArgs { output, force }
}

#[test]
fn template_parses_to_the_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_documents_every_section() {
    let template = generate_config_template();
    assert!(template.contains("[rules]"));
    assert!(template.contains("[checksum]"));
    assert!(template.contains("[output]"));
    assert!(template.contains("# path_limit = 240"));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".dark-guard.toml");

    run_init_impl(&init_args(config_path.clone(), false)).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".dark-guard.toml");
    std::fs::write(&config_path, "existing").unwrap();

    let err = run_init_impl(&init_args(config_path.clone(), false)).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "existing");
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".dark-guard.toml");
    std::fs::write(&config_path, "existing").unwrap();

    run_init_impl(&init_args(config_path.clone(), true)).unwrap();

    assert!(std::fs::read_to_string(&config_path).unwrap().contains("[rules]"));
}

#[test]
fn run_init_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("new.toml");
    let cli = Cli::try_parse_from(["dark-guard", "--color", "never", "init"]).unwrap();

    assert_eq!(run_init(&init_args(config_path.clone(), false), &cli), EXIT_SUCCESS);
    assert_eq!(run_init(&init_args(config_path, false), &cli), EXIT_CONFIG_ERROR);
}
