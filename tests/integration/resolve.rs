use predicates::prelude::*;
use tempfile::TempDir;

use super::{mcgradle, mcgradle_in};
use mcgradle_cli::test_utils::ProjectFixture;

fn project() -> ProjectFixture {
    ProjectFixture::new("1.12.2").unwrap().with_mappings("snapshot", "20171003").unwrap()
}

#[test]
fn test_resolve_standard_replacements() {
    let project = project();

    mcgradle_in(&project)
        .args(["resolve", "@MAPPING_CHANNEL@_@MAPPING_VERSION@/@MC_VERSION@"])
        .assert()
        .success()
        .stdout("snapshot_20171003/1.12.2\n");
}

#[test]
fn test_resolve_cache_dir() {
    let project = project();
    let expected = format!("{}\n", project.cache_dir().join("x").display());

    mcgradle_in(&project)
        .args(["resolve", "@CACHE_DIR@/x"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_resolve_applies_format_args() {
    let project = project();

    mcgradle_in(&project)
        .args(["resolve", "@MC_VERSION@-%s-%d-%b", "client", "3", "true"])
        .assert()
        .success()
        .stdout("1.12.2-client-3-true\n");
}

#[test]
fn test_resolve_unknown_token_suggests() {
    let project = project();

    mcgradle_in(&project)
        .args(["resolve", "@MC_VERSON@"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid replacement @MC_VERSON@"))
        .stderr(predicate::str::contains("Did you mean: @MC_VERSION@"));
}

#[test]
fn test_resolve_bad_format() {
    let project = project();

    mcgradle_in(&project)
        .args(["resolve", "@MC_VERSION@ is 100%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format string"));
}

#[test]
fn test_resolve_with_explicit_config() {
    let project = project();
    let elsewhere = TempDir::new().unwrap();

    mcgradle()
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(project.config_path())
        .args(["resolve", "@MAPPING_VERSION@"])
        .assert()
        .success()
        .stdout("20171003\n");
}

#[test]
fn test_resolve_without_config_fails() {
    let empty = TempDir::new().unwrap();

    mcgradle()
        .arg("--project-dir")
        .arg(empty.path())
        .args(["resolve", "@MC_VERSION@"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"))
        .stderr(predicate::str::contains("mcgradle.toml"));
}
