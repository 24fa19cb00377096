//! The suite's sole assertion primitive.
//!
//! Test scripts state a condition and zero or more diagnostic values; a false
//! condition fails the calling test by panicking with the values rendered as
//! one space-joined line. There are no failure categories and no
//! expected/actual structure — callers compose their own message.

use std::fmt::Display;

use thiserror::Error;

/// The single failure kind raised by [`check`].
///
/// Renders as the caller's messages space-joined in call order.
#[derive(Debug, Error)]
#[error("{}", .messages.join(" "))]
pub struct CheckFailure {
    /// Diagnostic values supplied by the caller, stringified, in call order.
    pub messages: Vec<String>,
}

/// Fail the calling test unless `assertion` holds.
///
/// When `assertion` is true, returns with no side effect. Nothing is logged
/// and nothing is recovered; propagation is entirely the test harness's
/// business.
///
/// # Panics
///
/// When `assertion` is false, with a [`CheckFailure`] carrying `messages`
/// (any display-formattable values, preserved in call order).
#[allow(clippy::panic, reason = "failing the calling test is the contract")]
#[track_caller]
pub fn check(assertion: bool, messages: &[&dyn Display]) {
    if !assertion {
        let failure = CheckFailure {
            messages: messages.iter().map(ToString::to_string).collect(),
        };
        panic!("{failure}");
    }
}

/// Variadic sugar over [`check`].
///
/// Usage: `check!(status.success(), "tool exited with", status)`
#[macro_export]
macro_rules! check {
    ($assertion:expr $(, $message:expr)* $(,)?) => {
        $crate::check::check($assertion, &[$(&$message),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_assertion_returns_without_effect() {
        check(true, &[]);
        check(true, &[&"ignored"]);
        check(true, &[&"ignored", &42, &1.5]);
    }

    #[test]
    #[should_panic(expected = "msg1 msg2")]
    fn false_assertion_panics_with_joined_messages() {
        check(false, &[&"msg1", &"msg2"]);
    }

    #[test]
    fn failure_renders_messages_in_call_order() {
        let failure = CheckFailure {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(failure.to_string(), "first second");
    }

    #[test]
    fn failure_with_no_messages_renders_empty() {
        let failure = CheckFailure { messages: vec![] };
        assert_eq!(failure.to_string(), "");
    }

    #[test]
    fn payload_is_exactly_the_joined_messages() {
        let outcome = std::panic::catch_unwind(|| check(false, &[&"msg1", &"msg2"]));
        let payload = outcome.expect_err("check(false, ..) must panic");
        let rendered = payload
            .downcast_ref::<String>()
            .expect("panic payload should be the rendered failure");
        assert_eq!(rendered, "msg1 msg2");
    }

    #[test]
    fn heterogeneous_values_stringify_in_order() {
        let outcome = std::panic::catch_unwind(|| {
            check(false, &[&"exit code", &3, &"from", &"aucont_stop"]);
        });
        let payload = outcome.expect_err("check(false, ..) must panic");
        let rendered = payload
            .downcast_ref::<String>()
            .expect("panic payload should be the rendered failure");
        assert_eq!(rendered, "exit code 3 from aucont_stop");
    }

    #[test]
    fn macro_accepts_bare_condition() {
        check!(true);
    }

    #[test]
    #[should_panic(expected = "container still listed after stop")]
    fn macro_forwards_messages() {
        let pid = 4242;
        check!(pid == 0, "container still listed after stop, pid", pid);
    }
}
