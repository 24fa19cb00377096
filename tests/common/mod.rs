//! Shared helpers for the integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// The aucont tool binaries the suite exercises.
#[allow(dead_code)]
pub(crate) const TOOLS: &[&str] = &["aucont_start", "aucont_stop", "aucont_exec", "aucont_list"];

/// Build a replica of the expected suite layout in a temporary directory:
/// a crate directory with sibling `rootfs` and `aucont/bin` directories.
///
/// Returns the suite root guard and the crate directory inside it.
#[allow(dead_code)]
pub(crate) fn create_suite_layout() -> (TempDir, PathBuf) {
    let suite = TempDir::new().expect("Failed to create temp dir");
    let crate_dir = suite.path().join("testkit");
    fs::create_dir(&crate_dir).expect("Failed to create crate dir");
    fs::create_dir(suite.path().join("rootfs")).expect("Failed to create rootfs");

    let bin_dir = suite.path().join("aucont").join("bin");
    fs::create_dir_all(&bin_dir).expect("Failed to create tool bin dir");
    for tool in TOOLS {
        fs::write(bin_dir.join(tool), b"").expect("Failed to create tool stub");
    }

    (suite, crate_dir)
}
