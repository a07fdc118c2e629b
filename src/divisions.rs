//! Division option generation
//!
//! Given one time-signature fraction, produce a prioritized list of candidate
//! partitions of its duration ("division options") for beaming and accent
//! analysis. Each strategy below is a pure function returning its own list;
//! [`division_options`] concatenates them in a fixed priority order, earlier
//! options being the simpler or more idiomatic groupings that downstream
//! logic should prefer.
//!
//! Options are sequences of fraction strings in the literal `"n/d"` form
//! that consumers re-parse or display directly.

use crate::models::{MAX_DENOMINATOR, MIN_DENOMINATOR};

/// One candidate subdivision: fraction strings in "n/d" form
pub type DivisionOption = Vec<String>;

fn fraction_str(n: u32, d: u32) -> String {
    format!("{}/{}", n, d)
}

/// `count` copies of the fraction `n/d`
fn repeated(n: u32, d: u32, count: u32) -> DivisionOption {
    (0..count).map(|_| fraction_str(n, d)).collect()
}

/// Idiomatic groupings for odd and composite numerators (5, 7 and 10).
///
/// Triggered purely by the numerator value; each group keeps the original
/// denominator.
pub fn division_options_special_groupings(n: u32, d: u32) -> Vec<DivisionOption> {
    let groups: &[&[u32]] = match n {
        5 => &[&[2, 3], &[3, 2]],
        7 => &[&[2, 2, 3], &[3, 2, 2], &[2, 3, 2]],
        10 => &[&[2, 2, 3, 3]],
        _ => &[],
    };
    groups
        .iter()
        .map(|group| group.iter().map(|&part| fraction_str(part, d)).collect())
        .collect()
}

/// Compound meters (6, 9, 12, ...) split into groups of three.
pub fn division_options_compound_triple(n: u32, d: u32) -> Vec<DivisionOption> {
    if n % 3 == 0 && n > 3 {
        vec![repeated(3, d, n / 3)]
    } else {
        Vec::new()
    }
}

/// Unit-fraction restatements in progressively smaller units.
///
/// 3/4 yields three 1/4, six 1/8 and twelve 1/16. The unit count is capped
/// at 16 (or at the numerator when that is larger) and the denominator at
/// the top of the valid ladder.
pub fn division_options_additive_multiples_upward(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if n > 1 && d >= 1 {
        let count_limit = n.max(16);
        let mut unit = d;
        let mut count = n;
        while unit <= MAX_DENOMINATOR && count <= count_limit {
            opts.push(repeated(1, unit, count));
            unit *= 2;
            count *= 2;
        }
    }
    opts
}

/// Halve numerator and denominator together, recording each step as equal
/// unit groups: 4/4 yields 1/2+1/2.
///
/// The step whose halved numerator goes odd is still recorded; the scan
/// stops right after it.
pub fn division_options_even_division(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if n % 2 == 0 && d / 2 >= 1 {
        let mut n_mod = n / 2;
        let mut d_mod = d / 2;
        while d_mod >= 1 && n_mod > 1 {
            opts.push(repeated(1, d_mod, n_mod));
            if n_mod % 2 != 0 {
                break;
            }
            n_mod /= 2;
            d_mod /= 2;
        }
    }
    opts
}

/// Additive multiples over the same denominator: two groups of n/2, four
/// groups of n/4, and so on while the group size stays above one.
///
/// Skips any sequence already present in `existing` (the options accumulated
/// by earlier strategies) or emitted earlier by this strategy; other
/// strategies may still duplicate each other.
pub fn division_options_additive_multiples(
    n: u32,
    d: u32,
    existing: &[DivisionOption],
) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if n > 3 && n % 2 == 0 {
        let mut count = 2;
        let mut n_mod = n / 2;
        while n_mod > 1 {
            let seq = repeated(n_mod, d, count);
            if !existing.contains(&seq) && !opts.contains(&seq) {
                opts.push(seq);
            }
            n_mod /= 2;
            count *= 2;
        }
    }
    opts
}

/// Unit-fraction splits of a single unit: two copies of 1/2d, four of 1/4d,
/// doubling while the denominator stays on the valid ladder. Only applies to
/// a numerator of exactly 1.
pub fn division_options_additive_multiples_downward(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if n == 1 && d < MAX_DENOMINATOR {
        let mut count = 2;
        let mut d_mod = d * 2;
        while d_mod <= MAX_DENOMINATOR {
            opts.push(repeated(n, d_mod, count));
            d_mod *= 2;
            count *= 2;
        }
    }
    opts
}

/// Restatements of the same fraction in larger units (12/16 -> 6/8 -> 3/4),
/// halving while the numerator stays even. The first odd restatement is
/// emitted and ends the walk.
pub fn division_options_fractions_downward(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if d > MIN_DENOMINATOR && n % 2 == 0 {
        let mut n_mod = n / 2;
        let mut d_mod = d / 2;
        while d_mod >= MIN_DENOMINATOR {
            opts.push(vec![fraction_str(n_mod, d_mod)]);
            if n_mod % 2 != 0 {
                break;
            }
            n_mod /= 2;
            d_mod /= 2;
        }
    }
    opts
}

/// Restatements of the same fraction in smaller units (2/4 -> 4/8 -> ... ->
/// 64/128), doubling up to the largest valid denominator.
pub fn division_options_fractions_upward(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if d < MAX_DENOMINATOR {
        let mut n_mod = n * 2;
        let mut d_mod = d * 2;
        while d_mod <= MAX_DENOMINATOR {
            opts.push(vec![fraction_str(n_mod, d_mod)]);
            n_mod *= 2;
            d_mod *= 2;
        }
    }
    opts
}

/// Generate ranked division options for one time-signature fraction.
///
/// Strategies run in a fixed priority order; their outputs are concatenated
/// as-is. Apart from the same-denominator additive strategy, which checks
/// the list accumulated so far, no deduplication happens; consumers tolerate
/// repeated sequences.
pub fn division_options(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    opts.extend(division_options_special_groupings(n, d));
    opts.extend(division_options_compound_triple(n, d));
    opts.extend(division_options_additive_multiples_upward(n, d));
    opts.extend(division_options_even_division(n, d));
    // the source fraction restated verbatim
    opts.push(vec![fraction_str(n, d)]);
    let additive = division_options_additive_multiples(n, d, &opts);
    opts.extend(additive);
    opts.extend(division_options_additive_multiples_downward(n, d));
    opts.extend(division_options_fractions_downward(n, d));
    opts.extend(division_options_fractions_upward(n, d));
    opts
}

/// Hand-curated groupings the general algorithm cannot reach.
///
/// Currently lets a numerator of 5 partition as 2+2+1 and 2+1+2 over any
/// denominator; additional to whatever [`division_options`] produces.
pub fn division_options_preset(n: u32, d: u32) -> Vec<DivisionOption> {
    let mut opts = Vec::new();
    if n == 5 {
        opts.push(vec![
            fraction_str(2, d),
            fraction_str(2, d),
            fraction_str(1, d),
        ]);
        opts.push(vec![
            fraction_str(2, d),
            fraction_str(1, d),
            fraction_str(2, d),
        ]);
    }
    opts
}
