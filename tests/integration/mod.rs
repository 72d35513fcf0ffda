//! Integration test suite for mcgradle
//!
//! End-to-end tests that drive the `mcgradle` binary against temporary
//! projects and local mock HTTP servers.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cache**: `cache info` / `cache clean` and the offline fallback
//! - **hash**: `hash` digests and algorithm errors
//! - **resolve**: Placeholder resolution and formatting errors
//! - **versions**: `versions` and `version-info` against a mock manifest server

use assert_cmd::Command;
use mcgradle_cli::test_utils::{ProjectFixture, init_test_logging};

mod cache;
mod hash;
mod resolve;
mod versions;

/// The `mcgradle` binary with logging quieted and colors off.
fn mcgradle() -> Command {
    init_test_logging(None);
    let mut cmd = Command::cargo_bin("mcgradle").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// The `mcgradle` binary run inside `project`.
fn mcgradle_in(project: &ProjectFixture) -> Command {
    let mut cmd = mcgradle();
    cmd.arg("--project-dir").arg(project.path());
    cmd
}
