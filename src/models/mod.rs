//! Value types for the meter engine
//!
//! This module defines the fundamental fraction-based structures
//! shared by the parser, the arithmetic helpers and the division
//! option generator.

pub mod core;

// Re-export commonly used types
pub use core::*;
