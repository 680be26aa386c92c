//! Tracing conventions for sortscope.
//!
//! The engine emits structured events through `tracing`; consumers bring
//! their own subscriber. This module fixes the span and field names so
//! subscribers, dashboards, and tests can match on them.

use tracing::Level;

/// Target prefix used by all sortscope tracing output.
///
/// Filter with:
/// ```text
/// RUST_LOG=sortscope=debug
/// ```
pub const TARGET_PREFIX: &str = "sortscope";

/// Standard span names.
pub mod span_names {
    /// One full run, from `start` to its terminal outcome. Entered by the
    /// worker thread; every step and outcome event is emitted inside it.
    pub const RUN: &str = "sortscope::run";
}

/// Standard structured field names.
pub mod field_names {
    pub const ALGORITHM: &str = "algorithm";
    pub const SEQUENCE_LEN: &str = "sequence_len";
    pub const SPEED: &str = "speed";
    pub const PHASE: &str = "phase";
    pub const COMPARISONS: &str = "comparisons";
    pub const SWAPS: &str = "swaps";
    pub const OUTCOME: &str = "outcome";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Recommended level for the current environment.
///
/// Checks `SORTSCOPE_LOG_LEVEL`, falling back to the provided default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("SORTSCOPE_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_span_name_matches_the_worker_span() {
        // The scheduler opens this span by literal; the constant must agree.
        assert_eq!(span_names::RUN, "sortscope::run");
        assert!(span_names::RUN.starts_with("sortscope::"));
    }

    #[test]
    fn field_names_are_non_empty() {
        for field in [
            field_names::ALGORITHM,
            field_names::SEQUENCE_LEN,
            field_names::SPEED,
            field_names::PHASE,
            field_names::COMPARISONS,
            field_names::SWAPS,
            field_names::OUTCOME,
        ] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn parse_level_recognizes_valid_levels() {
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_level("Info"), Some(Level::INFO));
        assert_eq!(parse_level("ERROR"), Some(Level::ERROR));
    }

    #[test]
    fn parse_level_rejects_unknown_input() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(" info "), None);
    }

    #[test]
    fn level_from_env_falls_back_to_default() {
        // The variable is not set in the test environment.
        assert_eq!(level_from_env(Level::WARN), Level::WARN);
    }
}
