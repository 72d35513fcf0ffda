use predicates::prelude::*;
use tempfile::TempDir;

use super::mcgradle;

#[test]
fn test_hash_empty_file_defaults_to_sha1() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("empty.bin");
    std::fs::write(&file, b"").unwrap();

    mcgradle()
        .arg("hash")
        .arg(&file)
        .assert()
        .success()
        .stdout("da39a3ee5e6b4b0d3255bfef95601890afd80709\n");
}

#[test]
fn test_hash_with_named_algorithm() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("hello.txt");
    std::fs::write(&file, b"hello world").unwrap();

    mcgradle()
        .args(["hash", "--algorithm", "sha-256"])
        .arg(&file)
        .assert()
        .success()
        .stdout("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9\n");
}

#[test]
fn test_hash_does_not_need_a_project() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data.bin");
    std::fs::write(&file, [1u8, 2, 3]).unwrap();

    mcgradle()
        .current_dir(temp.path())
        .args(["hash", "-a", "SHA-512"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{128}\n$").unwrap());
}

#[test]
fn test_hash_unsupported_algorithm() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("empty.bin");
    std::fs::write(&file, b"").unwrap();

    mcgradle()
        .args(["hash", "--algorithm", "MD4"])
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported hash algorithm: MD4"))
        .stderr(predicate::str::contains("SHA-256"));
}

#[test]
fn test_hash_missing_file() {
    let temp = TempDir::new().unwrap();

    mcgradle()
        .arg("hash")
        .arg(temp.path().join("absent.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File system error"))
        .stderr(predicate::str::contains("absent.bin"));
}
