//! Path resolution for the test suite layout.
//!
//! Every path is derived from the crate's own directory, so the helpers here
//! only work while the crate sits inside the suite tree next to its `rootfs`
//! and `aucont/bin` siblings. None of them touch the filesystem: a resolved
//! path that points at nothing is discovered by whatever file operation the
//! test script performs next.

use std::path::{Path, PathBuf};

/// Fixture root filesystem, relative to [`script_dir_path`].
pub const ROOTFS_DIR: &str = "../rootfs";

/// Directory holding the aucont tool binaries, relative to [`script_dir_path`].
pub const TOOL_BIN_DIR: &str = "../aucont/bin";

/// The directory containing this crate (the suite's anchor directory).
///
/// Baked in at build time from the crate manifest directory, so it is always
/// absolute and identical across calls.
#[must_use]
pub fn script_dir_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Root of the fixture filesystem tree used as container root by the tests.
///
/// The result keeps the literal `..` segment; it is not canonicalized and the
/// target is not checked for existence.
#[must_use]
pub fn test_rootfs_path() -> PathBuf {
    script_dir_path().join(ROOTFS_DIR)
}

/// Location of the tool binary `tool_name`, e.g. `aucont_start`.
///
/// The name is joined verbatim: no sanitization and no traversal guard, since
/// the only callers are the suite's own test scripts.
#[must_use]
pub fn aucont_tool_path(tool_name: impl AsRef<Path>) -> PathBuf {
    script_dir_path().join(TOOL_BIN_DIR).join(tool_name)
}
