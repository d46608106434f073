//! Integration tests for `rules`, `init` and global flags.

mod common;

use common::{TREE_DIR, TestFixture, clean_fixture};
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    dark_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn unknown_format_is_rejected_by_the_parser() {
    dark_guard!()
        .args(["check", ".", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

// =============================================================================
// rules
// =============================================================================

#[test]
fn rules_lists_validators_with_tiers() {
    let fixture = TestFixture::new();

    dark_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Validators to run:\n  broken-file (Critical)\n",
        ))
        .stdout(predicate::str::contains("  no-duped-names (Normal)"))
        .stdout(predicate::str::contains("  no-extraneous-files (Normal)"))
        .stdout(predicate::str::contains("  restrictive-naming (Normal)"));
}

#[test]
fn rules_quick_drops_only_content_dedup() {
    let fixture = TestFixture::new();

    dark_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "rules", "--quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-extraneous-files (Normal)"))
        .stdout(predicate::str::contains("no-duped-content").not());
}

#[test]
fn rules_rejects_critical_skip() {
    let fixture = TestFixture::new();

    dark_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "rules", "-s", "valid-windows-filename"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("valid-windows-filename"));
}

#[test]
fn rules_accepts_skipping_duplicate_names() {
    let fixture = TestFixture::new();

    dark_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "rules", "-s", "no-duped-names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-duped-names").not());
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_writes_a_config_that_check_accepts() {
    let fixture = clean_fixture();

    dark_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.path().join(".dark-guard.toml").exists());

    dark_guard!()
        .current_dir(fixture.path())
        .args(["--quiet", "check", TREE_DIR])
        .assert()
        .success();
}

#[test]
fn init_refuses_to_overwrite() {
    let fixture = TestFixture::new();
    fixture.create_config("[rules]\n");

    dark_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    dark_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = clean_fixture();

    dark_guard!()
        .current_dir(fixture.path())
        .env_remove("DARK_GUARD_LOG")
        .env_remove("RUST_LOG")
        .args(["--no-config", "-v", "check", TREE_DIR])
        .assert()
        .success()
        .stderr(predicate::str::contains("validating tree"))
        .stdout(predicate::str::contains("validating tree").not());
}

#[test]
fn quiet_run_keeps_stderr_empty() {
    let fixture = clean_fixture();

    dark_guard!()
        .current_dir(fixture.path())
        .env_remove("DARK_GUARD_LOG")
        .env_remove("RUST_LOG")
        .args(["--no-config", "--quiet", "check", TREE_DIR])
        .assert()
        .success()
        .stderr("");
}
