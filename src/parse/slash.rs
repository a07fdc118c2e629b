//! Slash-notation meter parsing
//!
//! Handles simple ("3/8"), compound ("3/8+2/8") and mixed summed-numerator
//! ("3+2/8") meter strings. Compound parsing drops unparseable terms
//! silently; mixed parsing is strict because its inputs typically come from
//! persisted scores.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::MeterError;
use crate::models::{FractionPair, FractionSequence, MeterTerminal, TempoIndication};

static TERMINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/(\d+)").expect("terminal pattern is valid"));

/// Parse one meter term such as "3/8", "7/32" or "slow 6/8".
///
/// The numeric part must match `digits/digits`; the non-numeric remainder is
/// searched case-insensitively for a "slow" or "fast" tempo qualifier.
/// Returns `None` when no fraction is present; callers treat that as an
/// unparseable term rather than a hard error.
pub fn parse_terminal(value: &str) -> Option<MeterTerminal> {
    // Split the input into its digit/slash substring and everything else
    let numbers: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '/')
        .collect();
    let chars: String = value
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '/')
        .collect::<String>()
        .to_lowercase();

    let tempo = if chars.contains("slow") {
        Some(TempoIndication::Slow)
    } else if chars.contains("fast") {
        Some(TempoIndication::Fast)
    } else {
        None
    };

    let caps = match TERMINAL_RE.captures(numbers.trim()) {
        Some(caps) => caps,
        None => {
            log::debug!("parse_terminal: cannot find two part fraction in {:?}", value);
            return None;
        }
    };
    let numerator = caps[1].parse().ok()?;
    let denominator = caps[2].parse().ok()?;
    Some(MeterTerminal::new(numerator, denominator, tempo))
}

/// Parse a compound meter such as "3/8+2/8" into numerator/denominator pairs.
///
/// Terms that fail to parse are dropped; result order matches input order.
pub fn parse_compound(value: &str) -> FractionSequence {
    value
        .trim()
        .split('+')
        .filter_map(|part| parse_terminal(part.trim()))
        .map(|terminal| terminal.fraction())
        .collect()
}

/// Parse a meter string that may use summed-numerator shorthand ("3+2/8").
///
/// Returns the expanded fraction list and a flag that is true iff at least
/// one bare numerator had to borrow its denominator from a later term.
pub fn parse_mixed(value: &str) -> Result<(FractionSequence, bool), MeterError> {
    let mut pre: Vec<(u32, Option<u32>)> = Vec::new();
    for part in value.trim().split('+') {
        let part = part.trim();
        if part.contains('/') {
            let terminal = parse_terminal(part)
                .ok_or_else(|| MeterError::InvalidTimeSignature(value.to_string()))?;
            pre.push((terminal.numerator, Some(terminal.denominator)));
        } else {
            let numerator = part
                .parse()
                .map_err(|_| MeterError::CorruptNumerator(value.to_string()))?;
            pre.push((numerator, None));
        }
    }

    // A bare numerator adopts the denominator of the nearest later term that
    // has one; no later denominator is a structural contradiction.
    let mut post = Vec::with_capacity(pre.len());
    let mut summed_numerator = false;
    for i in 0..pre.len() {
        let (numerator, denominator) = pre[i];
        let denominator = match denominator {
            Some(d) => d,
            None => {
                summed_numerator = true;
                pre[i..]
                    .iter()
                    .find_map(|&(_, d)| d)
                    .ok_or_else(|| MeterError::UnmatchedDenominator(value.to_string()))?
            }
        };
        post.push((numerator, denominator));
    }
    Ok((post, summed_numerator))
}

/// Compact a fraction list by summing consecutive same-denominator numerators
/// into one `"a+b+c"` label.
///
/// Only adjacency counts: a denominator change always starts a new group,
/// even if the same denominator reappears later.
pub fn format_mixed(fractions: &[FractionPair]) -> Vec<(String, u32)> {
    let mut groups: Vec<(Vec<u32>, u32)> = Vec::new();
    for &(n, d) in fractions {
        match groups.last_mut() {
            Some((numerators, denominator)) if *denominator == d => numerators.push(n),
            _ => groups.push((vec![n], d)),
        }
    }
    groups
        .into_iter()
        .map(|(numerators, d)| {
            let label = numerators
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("+");
            (label, d)
        })
        .collect()
}
