//! Meter arithmetic and beat-division engine
//!
//! This crate is the meter core of a music notation toolkit. It converts
//! textual time-signature notation ("3/8+2/8", "slow 6/8", "3+2/8") into
//! fraction sequences, sums musical fractions without reducing them to
//! lowest terms (3/8 + 3/8 is 6/8, not 3/4), and generates ranked candidate
//! subdivisions of a time signature's total duration for beaming and accent
//! analysis.

pub mod models;
pub mod parse;
pub mod arithmetic;
pub mod divisions;

// Re-export commonly used types
pub use models::core::*;
pub use parse::{parse_compound, parse_mixed, parse_terminal, format_mixed, MeterError};
pub use arithmetic::{fraction_sum, proportion_to_fraction};
pub use divisions::{division_options, division_options_preset, DivisionOption};
