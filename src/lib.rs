//! Support library for the `aucont` integration-test suite.
//!
//! Test scripts use this crate to locate fixture assets and the tool binaries
//! under test (`aucont_start`, `aucont_stop`, `aucont_exec`, `aucont_list`),
//! to assert expected conditions, and to emit leveled diagnostic output. It
//! never invokes the tools, parses their output, or orchestrates test runs —
//! that belongs to the runner and the individual scripts.
//!
//! Layout contract: the crate directory must sit inside the suite tree with a
//! sibling `rootfs` fixture tree and a sibling `aucont/bin` directory holding
//! the tool binaries. Moving the crate breaks both derived paths.

pub mod check;
pub mod log;
pub mod paths;

// Re-export common types for convenience
pub use check::{CheckFailure, check};
pub use log::{
    DEFAULT_VERBOSITY, Level, ParseLevelError, VERBOSITY_ENV, debug, enabled, init_verbosity, log,
    verbosity,
};
pub use paths::{ROOTFS_DIR, TOOL_BIN_DIR, aucont_tool_path, script_dir_path, test_rootfs_path};
