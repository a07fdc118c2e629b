//! Non-reducing fraction arithmetic
//!
//! Musical fraction sums keep their written denominator: 3/8 + 3/8 is 6/8,
//! not 3/4, so none of these helpers reduce results to lowest terms.

use num_integer::lcm;
use num_rational::Ratio;
use num_traits::Signed;

use crate::models::FractionPair;

/// Sum a list of fractions without reducing the result to lowest terms.
///
/// An empty list sums to `(0, 1)`. When all terms share one denominator the
/// numerators are summed over it directly; otherwise every term is rescaled
/// over the least common multiple of the distinct denominators.
pub fn fraction_sum(fractions: &[FractionPair]) -> FractionPair {
    if fractions.is_empty() {
        return (0, 1);
    }

    let mut distinct: Vec<u32> = Vec::new();
    for &(_, d) in fractions {
        if !distinct.contains(&d) {
            distinct.push(d);
        }
    }

    if let [d] = distinct[..] {
        return (fractions.iter().map(|&(n, _)| n).sum(), d);
    }

    let common = distinct.iter().fold(1, |acc, &d| lcm(acc, d));
    let total = fractions.iter().map(|&(n, d)| n * (common / d)).sum();
    (total, common)
}

/// Best-fit small fraction for a proportional value in `[0, 1]`.
///
/// Finds the closest rational with denominator at most 16 by walking the
/// continued-fraction convergents of the value, mapping a floating-point
/// beat proportion back onto a notationally meaningful fraction.
pub fn proportion_to_fraction(value: f64) -> FractionPair {
    const LIMIT: i64 = 16;

    let exact: Ratio<i64> = match Ratio::approximate_float(value) {
        Some(ratio) => ratio,
        None => return (0, 1),
    };
    let (mut n, mut d) = (*exact.numer(), *exact.denom());
    if d <= LIMIT {
        return (n as u32, d as u32);
    }

    // p0/q0 and p1/q1 track the previous and current convergents
    let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > LIMIT {
            break;
        }
        let (next_p1, next_q1) = (p0 + a * p1, q2);
        p0 = p1;
        q0 = q1;
        p1 = next_p1;
        q1 = next_q1;
        let remainder = n - a * d;
        n = d;
        d = remainder;
    }

    // The answer is the last convergent or its best semiconvergent within
    // the denominator limit, whichever lies closer to the value.
    let k = (LIMIT - q0) / q1;
    let semiconvergent = Ratio::new(p0 + k * p1, q0 + k * q1);
    let convergent = Ratio::new(p1, q1);
    let best = if (convergent - exact).abs() <= (semiconvergent - exact).abs() {
        convergent
    } else {
        semiconvergent
    };
    (*best.numer() as u32, *best.denom() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_sum_shared_denominator() {
        assert_eq!(fraction_sum(&[(3, 8), (5, 8), (1, 8)]), (9, 8));
    }

    #[test]
    fn test_fraction_sum_does_not_reduce() {
        // 3/8 + 3/8 is 6/8, never 3/4
        assert_eq!(fraction_sum(&[(3, 8), (3, 8)]), (6, 8));
    }

    #[test]
    fn test_fraction_sum_mixed_denominators() {
        assert_eq!(fraction_sum(&[(1, 6), (2, 3)]), (5, 6));
        assert_eq!(fraction_sum(&[(3, 4), (1, 2)]), (5, 4));
        assert_eq!(fraction_sum(&[(1, 13), (2, 17)]), (43, 221));
    }

    #[test]
    fn test_fraction_sum_empty() {
        assert_eq!(fraction_sum(&[]), (0, 1));
    }

    #[test]
    fn test_proportion_exact_binary_values() {
        assert_eq!(proportion_to_fraction(0.5), (1, 2));
        assert_eq!(proportion_to_fraction(0.25), (1, 4));
        assert_eq!(proportion_to_fraction(0.75), (3, 4));
        assert_eq!(proportion_to_fraction(0.125), (1, 8));
        assert_eq!(proportion_to_fraction(0.375), (3, 8));
        assert_eq!(proportion_to_fraction(0.625), (5, 8));
    }

    #[test]
    fn test_proportion_approximated_values() {
        assert_eq!(proportion_to_fraction(0.333), (1, 3));
        assert_eq!(proportion_to_fraction(0.83333), (5, 6));
        assert_eq!(proportion_to_fraction(1.0 / 3.0), (1, 3));
    }

    #[test]
    fn test_proportion_boundaries() {
        assert_eq!(proportion_to_fraction(0.0), (0, 1));
        assert_eq!(proportion_to_fraction(1.0), (1, 1));
    }
}
