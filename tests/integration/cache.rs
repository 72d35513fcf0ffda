use mockito::{Mock, Server, ServerGuard};
use predicates::prelude::*;

use super::mcgradle_in;
use mcgradle_cli::test_utils::{ProjectFixture, manifest_json};

/// Nothing listens on port 1, so every request fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:1/version_manifest.json";

/// Server plus its mocks; dropping a mock removes it from the server.
type Online = (ServerGuard, Vec<Mock>);

fn online_project() -> (Online, ProjectFixture) {
    let mut server = Server::new();
    let manifest =
        manifest_json(&[("1.12", "release", &format!("{}/v1/1.12.json", server.url()))]);
    let mocks = vec![
        server.mock("GET", "/manifest.json").with_body(manifest).create(),
        server.mock("GET", "/v1/1.12.json").with_body(r#"{"id":"1.12"}"#).create(),
    ];

    let project = ProjectFixture::new("1.12")
        .unwrap()
        .with_manifest_url(&format!("{}/manifest.json", server.url()))
        .unwrap();
    ((server, mocks), project)
}

#[test]
fn test_offline_run_falls_back_to_cached_manifest() {
    let (_server, project) = online_project();
    mcgradle_in(&project).arg("versions").assert().success().stdout("1.12\trelease\n");

    let project = project.with_manifest_url(UNREACHABLE).unwrap();
    mcgradle_in(&project)
        .arg("versions")
        .assert()
        .success()
        .stdout("1.12\trelease\n")
        .stderr(predicate::str::contains("using cached copy"));
}

#[test]
fn test_offline_without_cache_fails() {
    let project = ProjectFixture::new("1.12").unwrap().with_manifest_url(UNREACHABLE).unwrap();

    mcgradle_in(&project)
        .arg("versions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error fetching"))
        .stderr(predicate::str::contains("127.0.0.1:1"));
}

#[test]
fn test_cache_info_reports_presence() {
    let (_server, project) = online_project();
    let manifest_path = project.manifest_cache_path().display().to_string();

    mcgradle_in(&project)
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(manifest_path.clone()))
        .stdout(predicate::str::contains("missing"))
        .stdout(predicate::str::contains("present").not());

    mcgradle_in(&project).arg("version-info").assert().success();

    mcgradle_in(&project)
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("missing").not());
}

#[test]
fn test_cache_clean_removes_documents() {
    let (_server, project) = online_project();
    mcgradle_in(&project).arg("version-info").assert().success();
    assert!(project.manifest_cache_path().is_file());
    assert!(project.version_cache_path().is_file());

    mcgradle_in(&project)
        .args(["cache", "clean"])
        .assert()
        .success()
        .stdout("Removed 2 cached file(s)\n");

    assert!(!project.manifest_cache_path().exists());
    assert!(!project.version_cache_path().exists());

    mcgradle_in(&project)
        .args(["cache", "clean"])
        .assert()
        .success()
        .stdout("Removed 0 cached file(s)\n");
}
