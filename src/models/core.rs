//! Core value types for meter fragments
//!
//! A meter string such as "slow 6/8" parses into a `MeterTerminal`; all
//! further analysis works on plain `(numerator, denominator)` pairs. Every
//! type here is an immutable value constructed on demand and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numerator/denominator pair; the unit currency of the engine.
///
/// The denominator is always positive. It is only required to be a power of
/// two where a caller validates it against [`VALID_DENOMINATORS`].
pub type FractionPair = (u32, u32);

/// Ordered sequence of fractions; order encodes the left-to-right grouping
/// a performer reads.
pub type FractionSequence = Vec<FractionPair>;

/// Denominators the notation system treats as legal, in ascending order
pub const VALID_DENOMINATORS: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

/// Smallest notationally legal denominator
pub const MIN_DENOMINATOR: u32 = VALID_DENOMINATORS[0];

/// Largest notationally legal denominator
pub const MAX_DENOMINATOR: u32 = VALID_DENOMINATORS[7];

/// Tempo qualifier written in front of a meter term ("slow 6/8")
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TempoIndication {
    Slow,
    Fast,
}

impl fmt::Display for TempoIndication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempoIndication::Slow => write!(f, "slow"),
            TempoIndication::Fast => write!(f, "fast"),
        }
    }
}

/// One irreducible meter fragment exactly as written
///
/// Produced only by the parser; the numerator and denominator are kept
/// verbatim, never reduced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeterTerminal {
    /// Beats per measure exactly as written
    pub numerator: u32,

    /// Beat unit
    pub denominator: u32,

    /// Optional tempo qualifier parsed from the source text
    pub tempo: Option<TempoIndication>,
}

impl MeterTerminal {
    /// Create a new terminal
    pub fn new(numerator: u32, denominator: u32, tempo: Option<TempoIndication>) -> Self {
        Self {
            numerator,
            denominator,
            tempo,
        }
    }

    /// The numerator/denominator pair without the tempo qualifier
    pub fn fraction(&self) -> FractionPair {
        (self.numerator, self.denominator)
    }
}

impl fmt::Display for MeterTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tempo) = self.tempo {
            write!(f, "{} {}/{}", tempo, self.numerator, self.denominator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
