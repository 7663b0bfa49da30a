//! Error types for the Training Tracker

use thiserror::Error;

/// Errors surfaced while resolving a sensor package into a workout variant.
///
/// Both cases are programming/input errors: they propagate to the caller
/// unrecovered, with no retry and no defaulting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown workout tag: {0}")]
    UnknownTag(String),

    #[error("Malformed {tag} sample: expected {expected} fields, got {got}")]
    SampleShape {
        tag: &'static str,
        expected: usize,
        got: usize,
    },
}
