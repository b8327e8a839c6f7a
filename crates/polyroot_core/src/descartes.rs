//! Descartes' rule of signs.
//!
//! The number of positive real roots of P is at most the number of sign
//! changes in its nonzero coefficients, and differs from it by an even
//! number. Applying the same count to P(−x) bounds the negative roots.
//! Independent of the numerical search; used as a cross-check on it.

use crate::polynomial::Polynomial;
use crate::root_types::RootSignSummary;

/// Upper bounds on the number of positive and negative real roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignBounds {
    /// Sign changes in P(x).
    pub max_positive: usize,
    /// Sign changes in P(−x).
    pub max_negative: usize,
}

impl SignBounds {
    /// Admissible positive-root counts: max, max − 2, … down to 0 or 1.
    pub fn possible_positive(&self) -> Vec<usize> {
        parity_steps(self.max_positive)
    }

    /// Admissible negative-root counts: max, max − 2, … down to 0 or 1.
    pub fn possible_negative(&self) -> Vec<usize> {
        parity_steps(self.max_negative)
    }

    /// Whether a set of found roots stays within both bounds.
    ///
    /// Only the upper bounds are checked; the sweep may legitimately miss
    /// roots, so fewer is always admissible.
    pub fn admits(&self, summary: &RootSignSummary) -> bool {
        summary.positive <= self.max_positive && summary.negative <= self.max_negative
    }
}

fn parity_steps(max: usize) -> Vec<usize> {
    (0..=max).rev().step_by(2).collect()
}

/// Count sign changes in a coefficient sequence, ignoring zeros.
pub fn count_sign_changes<I>(coeffs: I) -> usize
where
    I: IntoIterator<Item = f64>,
{
    let mut changes = 0;
    let mut last_positive: Option<bool> = None;

    for c in coeffs {
        if c == 0.0 {
            continue;
        }
        let positive = c > 0.0;
        if last_positive.is_some_and(|prev| prev != positive) {
            changes += 1;
        }
        last_positive = Some(positive);
    }

    changes
}

/// Coefficients of P(−x): odd-degree terms change sign.
pub fn reflect_coefficients(coeffs: &[f64]) -> Vec<f64> {
    let degree = coeffs.len().saturating_sub(1);
    coeffs
        .iter()
        .enumerate()
        .map(|(i, &c)| if (degree - i) % 2 == 1 { -c } else { c })
        .collect()
}

/// Apply Descartes' rule of signs to `poly`.
pub fn descartes_bounds(poly: &Polynomial) -> SignBounds {
    let coeffs = poly.coefficients();
    SignBounds {
        max_positive: count_sign_changes(coeffs.iter().copied()),
        max_negative: count_sign_changes(reflect_coefficients(coeffs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(c: &[f64]) -> SignBounds {
        descartes_bounds(&Polynomial::new(c.to_vec()).unwrap())
    }

    #[test]
    fn difference_of_squares() {
        // x² − 4: one change either way, matching ±2
        assert_eq!(
            bounds(&[1.0, 0.0, -4.0]),
            SignBounds {
                max_positive: 1,
                max_negative: 1,
            }
        );
    }

    #[test]
    fn cubic_with_three_positive_roots() {
        // (x−1)(x−2)(x−3) = x³ − 6x² + 11x − 6
        let b = bounds(&[1.0, -6.0, 11.0, -6.0]);
        assert_eq!(b.max_positive, 3);
        assert_eq!(b.max_negative, 0);
        assert_eq!(b.possible_positive(), vec![3, 1]);
        assert_eq!(b.possible_negative(), vec![0]);
    }

    #[test]
    fn no_real_roots_still_bounded() {
        // x² + 1
        let b = bounds(&[1.0, 0.0, 1.0]);
        assert_eq!(b.max_positive, 0);
        assert_eq!(b.max_negative, 0);
    }

    #[test]
    fn constant_has_no_changes() {
        let b = bounds(&[5.0]);
        assert_eq!(b.max_positive, 0);
        assert_eq!(b.max_negative, 0);
    }

    #[test]
    fn zeros_skipped_between_signs() {
        assert_eq!(count_sign_changes([1.0, 0.0, 0.0, -2.0, 0.0, 3.0]), 2);
        assert_eq!(count_sign_changes([0.0, 0.0]), 0);
        assert_eq!(count_sign_changes([-0.0, 1.0]), 0);
    }

    #[test]
    fn reflection_flips_odd_degrees() {
        // x³ + 2x² + 3x + 4 → −x³ + 2x² − 3x + 4
        assert_eq!(
            reflect_coefficients(&[1.0, 2.0, 3.0, 4.0]),
            vec![-1.0, 2.0, -3.0, 4.0]
        );
        assert_eq!(reflect_coefficients(&[7.0]), vec![7.0]);
    }

    #[test]
    fn possible_counts_by_parity() {
        let b = SignBounds {
            max_positive: 4,
            max_negative: 1,
        };
        assert_eq!(b.possible_positive(), vec![4, 2, 0]);
        assert_eq!(b.possible_negative(), vec![1]);
    }

    #[test]
    fn admits_checks_upper_bounds() {
        let b = SignBounds {
            max_positive: 1,
            max_negative: 2,
        };
        let within = RootSignSummary {
            positive: 1,
            negative: 0,
            zero: 1,
        };
        let over = RootSignSummary {
            positive: 2,
            negative: 0,
            zero: 0,
        };
        assert!(b.admits(&within));
        assert!(!b.admits(&over));
    }
}
