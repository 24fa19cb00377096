//! Leveled diagnostic output for test runs.
//!
//! A single process-wide verbosity threshold gates two tagged line printers.
//! The threshold is set once — through [`init_verbosity`] before any test
//! logic runs, or through the `AUCONT_TEST_VERBOSITY` environment variable —
//! and is read-only afterwards, so parallel test scripts only ever read it.
//! Output is plain tagged lines on standard output: no timestamps, no
//! structured fields, no destination configuration.

use std::env;
use std::fmt::{self, Display, Write};
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// Environment variable consulted when [`init_verbosity`] was never called.
pub const VERBOSITY_ENV: &str = "AUCONT_TEST_VERBOSITY";

/// Threshold used when neither [`init_verbosity`] nor the environment set one.
pub const DEFAULT_VERBOSITY: Level = Level::Debug;

/// Verbosity levels, ordered: a higher value means chattier output.
///
/// The numeric values are part of the contract (`Quiet` exists so the
/// threshold can sit below `Info` and suppress everything).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Suppresses all diagnostic output.
    Quiet = 0,
    /// Progress lines tagged `INFO:`.
    Info = 4,
    /// Everything, including lines tagged `DEBUG:`.
    Debug = 5,
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts the level names and their numeric forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" | "0" => Ok(Self::Quiet),
            "info" | "4" => Ok(Self::Info),
            "debug" | "5" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Returned when a verbosity level string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown verbosity level: {0:?}")]
pub struct ParseLevelError(String);

static VERBOSITY: OnceLock<Level> = OnceLock::new();

/// Set the process-wide verbosity threshold.
///
/// The first call (or the first read, whichever happens first) wins; later
/// calls are ignored. Call it from the harness before any test logic runs.
pub fn init_verbosity(level: Level) {
    let _ = VERBOSITY.set(level);
}

/// Current verbosity threshold.
///
/// When the threshold was never initialized, the first read resolves it from
/// [`VERBOSITY_ENV`] (falling back to [`DEFAULT_VERBOSITY`]) and freezes it.
#[must_use]
pub fn verbosity() -> Level {
    *VERBOSITY.get_or_init(|| resolve(env::var(VERBOSITY_ENV).ok()))
}

/// Whether messages at `level` currently pass the threshold.
#[must_use]
pub fn enabled(level: Level) -> bool {
    verbosity() >= level
}

/// Print a `DEBUG:`-tagged line of space-joined values, if `Debug` is enabled.
pub fn debug(args: &[&dyn Display]) {
    if enabled(Level::Debug) {
        println!("{}", render("DEBUG:", args));
    }
}

/// Print an `INFO:`-tagged line of space-joined values, if `Info` is enabled.
pub fn log(args: &[&dyn Display]) {
    if enabled(Level::Info) {
        println!("{}", render("INFO:", args));
    }
}

fn resolve(raw: Option<String>) -> Level {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_VERBOSITY)
}

fn render(tag: &str, args: &[&dyn Display]) -> String {
    let mut line = String::from(tag);
    for arg in args {
        let _ = write!(line, " {arg}");
    }
    line
}

/// Variadic sugar over [`debug`].
///
/// Usage: `debug!("started container", pid)`
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::log::debug(&[$(&$arg),*])
    };
}

/// Variadic sugar over [`log`].
///
/// Usage: `log!("running", test_name)`
#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {
        $crate::log::log(&[$(&$arg),*])
    };
}
