//! Error types for meter string parsing
//!
//! An unparseable terminal on its own is non-fatal (`parse_terminal` returns
//! `None`); the errors here are structural contradictions in the input. Each
//! variant carries the original meter string verbatim so callers can report
//! the exact malformed notation to a user.

use thiserror::Error;

/// Fatal meter parsing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MeterError {
    /// A `+`-separated segment contained a slash but no parseable fraction
    #[error("cannot create time signature from: {0}")]
    InvalidTimeSignature(String),

    /// A numerator-only segment was not an integer; this usually means the
    /// persisted source of the time signature is corrupted
    #[error("cannot read numerator-only term in time signature: {0}")]
    CorruptNumerator(String),

    /// A bare numerator had no later term with a denominator to adopt
    #[error("cannot match denominator to numerator in: {0}")]
    UnmatchedDenominator(String),
}
