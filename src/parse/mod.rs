//! Meter string parsing
//!
//! This module contains the parsing logic for converting textual
//! time-signature notation into fraction sequences, including the
//! summed-numerator shorthand ("3+2/8") and its inverse formatting.

pub mod errors;
pub mod slash;

// Re-export commonly used types
pub use errors::MeterError;
pub use slash::*;
