use mockito::{Matcher, Mock, Server, ServerGuard};
use predicates::prelude::*;

use super::mcgradle_in;
use mcgradle_cli::test_utils::{ProjectFixture, manifest_json};

const MAIN_CLASS: &str = "net.minecraft.client.main.Main";

/// Mock server serving a manifest with one release and one snapshot.
///
/// Mocks are removed when dropped, so they travel with the server.
struct MetaServer {
    server: ServerGuard,
    _mocks: Vec<Mock>,
}

fn meta_server() -> MetaServer {
    let mut server = Server::new();
    let manifest = manifest_json(&[
        ("18w30a", "snapshot", &format!("{}/v1/18w30a.json", server.url())),
        ("1.12", "release", &format!("{}/v1/1.12.json", server.url())),
    ]);

    let manifest_mock = server
        .mock("GET", "/mc/game/version_manifest.json")
        .match_header("user-agent", Matcher::Regex("^mcgradle/".to_string()))
        .with_body(manifest)
        .create();
    let version_mock = server
        .mock("GET", "/v1/1.12.json")
        .with_body(format!(r#"{{"id":"1.12","mainClass":"{MAIN_CLASS}","minimumLauncherVersion":18}}"#))
        .create();

    MetaServer {
        server,
        _mocks: vec![manifest_mock, version_mock],
    }
}

fn project_for(meta: &MetaServer, version: &str) -> ProjectFixture {
    project_at(&meta.server, version)
}

fn project_at(server: &ServerGuard, version: &str) -> ProjectFixture {
    ProjectFixture::new(version)
        .unwrap()
        .with_manifest_url(&format!("{}/mc/game/version_manifest.json", server.url()))
        .unwrap()
}

#[test]
fn test_versions_lists_manifest() {
    let server = meta_server();
    let project = project_for(&server, "1.12");

    mcgradle_in(&project)
        .arg("versions")
        .assert()
        .success()
        .stdout("18w30a\tsnapshot\n1.12\trelease\n");

    assert!(project.manifest_cache_path().is_file());
}

#[test]
fn test_versions_filtered_by_type() {
    let server = meta_server();
    let project = project_for(&server, "1.12");

    mcgradle_in(&project)
        .args(["versions", "--type", "release"])
        .assert()
        .success()
        .stdout("1.12\trelease\n");
}

#[test]
fn test_version_info_prints_metadata() {
    let server = meta_server();
    let project = project_for(&server, "1.12");

    mcgradle_in(&project)
        .arg("version-info")
        .assert()
        .success()
        .stdout(predicate::str::contains(MAIN_CLASS))
        .stdout(predicate::str::contains("\"minimumLauncherVersion\": 18"));

    assert!(project.version_cache_path().is_file());
}

#[test]
fn test_version_info_single_key() {
    let server = meta_server();
    let project = project_for(&server, "1.12");

    mcgradle_in(&project)
        .args(["version-info", "--key", "mainClass"])
        .assert()
        .success()
        .stdout(format!("{MAIN_CLASS}\n"));

    mcgradle_in(&project)
        .args(["version-info", "--key", "minimumLauncherVersion"])
        .assert()
        .success()
        .stdout("18\n");
}

#[test]
fn test_version_info_missing_key() {
    let server = meta_server();
    let project = project_for(&server, "1.12");

    mcgradle_in(&project)
        .args(["version-info", "--key", "assets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no key 'assets'"));
}

#[test]
fn test_version_info_unknown_version() {
    let server = meta_server();
    let project = project_for(&server, "1.14");

    mcgradle_in(&project)
        .arg("version-info")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown version 1.14"))
        .stderr(predicate::str::contains("Did you mean: 1.12"));
}

#[test]
fn test_server_error_without_cache_fails() {
    let mut server = Server::new();
    let _mock = server.mock("GET", "/mc/game/version_manifest.json").with_status(500).create();
    let project = project_at(&server, "1.12");

    mcgradle_in(&project)
        .arg("versions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"))
        .stderr(predicate::str::contains("500"));

    assert!(!project.manifest_cache_path().exists());
}
