//! Polynomial value and first-derivative evaluation.
//!
//! Two interchangeable strategies behind the [`Evaluator`] trait:
//!
//! - [`SyntheticDivision`]: two chained Briot-Ruffini passes. Dividing P by
//!   (x − x₀) leaves remainder P(x₀); dividing the quotient by (x − x₀)
//!   again leaves remainder P'(x₀). No allocation per call.
//! - [`DifferentiatedForm`]: differentiates once by the power rule at
//!   construction, then evaluates P and P' with one Horner pass each.
//!
//! Arithmetic is plain f64 with no overflow guarding. Non-finite
//! intermediates propagate to the caller.

use crate::polynomial::Polynomial;

/// P(x) and P'(x) at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub derivative: f64,
}

/// Capability to evaluate a fixed polynomial and its derivative at a point.
pub trait Evaluator {
    fn evaluate(&self, x: f64) -> Evaluation;
}

/// Which [`Evaluator`] a sweep builds for its polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluatorKind {
    /// [`SyntheticDivision`].
    #[default]
    SyntheticDivision,
    /// [`DifferentiatedForm`].
    Differentiated,
}

/// Evaluate P(x) with a single Horner pass.
///
/// Coefficients are highest degree first. An empty slice evaluates to 0.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    let Some((&first, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    rest.iter().fold(first, |acc, &c| c + acc * x)
}

/// Evaluate `(P(x), P'(x))` by two chained synthetic divisions.
///
/// First pass: `b[0] = a[0]`, `b[i] = a[i] + b[i-1]·x`, so `P(x) = b[n-1]`.
/// Second pass over the quotient `b[0..n-1]`: `c[0] = b[0]`,
/// `c[i] = b[i] + c[i-1]·x`, so `P'(x) = c[n-2]`.
///
/// A constant (single coefficient) returns derivative 0; an empty slice
/// returns `(0, 0)`.
pub fn synthetic_division(coeffs: &[f64], x: f64) -> (f64, f64) {
    let n = coeffs.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    if n == 1 {
        return (coeffs[0], 0.0);
    }

    let mut b = coeffs[0]; // b[i]
    let mut c = coeffs[0]; // c[i], trails b by one division

    for (i, &a) in coeffs.iter().enumerate().skip(1) {
        b = a + b * x;
        if i < n - 1 {
            c = b + c * x;
        }
    }

    (b, c)
}

/// Synthetic-division evaluator borrowing the coefficient slice.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticDivision<'a> {
    coeffs: &'a [f64],
}

impl<'a> SyntheticDivision<'a> {
    pub fn new(poly: &'a Polynomial) -> Self {
        Self {
            coeffs: poly.coefficients(),
        }
    }
}

impl Evaluator for SyntheticDivision<'_> {
    fn evaluate(&self, x: f64) -> Evaluation {
        let (value, derivative) = synthetic_division(self.coeffs, x);
        Evaluation { value, derivative }
    }
}

/// Evaluator holding P and an explicitly differentiated P'.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentiatedForm {
    value_coeffs: Vec<f64>,
    derivative_coeffs: Vec<f64>,
}

impl DifferentiatedForm {
    pub fn new(poly: &Polynomial) -> Self {
        Self {
            value_coeffs: poly.coefficients().to_vec(),
            derivative_coeffs: poly.derivative_coefficients(),
        }
    }

    /// Derivative coefficients, highest degree first.
    pub fn derivative_coefficients(&self) -> &[f64] {
        &self.derivative_coeffs
    }
}

impl Evaluator for DifferentiatedForm {
    fn evaluate(&self, x: f64) -> Evaluation {
        Evaluation {
            value: horner(&self.value_coeffs, x),
            derivative: horner(&self.derivative_coeffs, x),
        }
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, x: f64) -> Evaluation {
        (**self).evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn poly(c: &[f64]) -> Polynomial {
        Polynomial::new(c.to_vec()).unwrap()
    }

    /// Σ a_i · x^(n-1-i), no Horner.
    fn direct_value(coeffs: &[f64], x: f64) -> f64 {
        let n = coeffs.len();
        coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c * x.powi((n - 1 - i) as i32))
            .sum()
    }

    #[test]
    fn constant_has_zero_derivative() {
        assert_eq!(synthetic_division(&[7.0], 3.0), (7.0, 0.0));
        let e = DifferentiatedForm::new(&poly(&[7.0])).evaluate(3.0);
        assert_eq!(e.value, 7.0);
        assert_eq!(e.derivative, 0.0);
    }

    #[test]
    fn empty_coefficients() {
        assert_eq!(synthetic_division(&[], 1.0), (0.0, 0.0));
        assert_eq!(horner(&[], 1.0), 0.0);
    }

    #[test]
    fn linear_polynomial() {
        // 2x − 3: value 2·4 − 3 = 5, slope 2
        let (v, d) = synthetic_division(&[2.0, -3.0], 4.0);
        assert!((v - 5.0).abs() < EPS);
        assert!((d - 2.0).abs() < EPS);
    }

    #[test]
    fn quadratic_difference_of_squares() {
        // x² − 4 at x = 3: value 5, derivative 6
        let (v, d) = synthetic_division(&[1.0, 0.0, -4.0], 3.0);
        assert!((v - 5.0).abs() < EPS);
        assert!((d - 6.0).abs() < EPS);
    }

    #[test]
    fn cubic_matches_analytic_derivative() {
        // 2x³ − 3x² + 5x − 7, P'(x) = 6x² − 6x + 5
        let coeffs = [2.0, -3.0, 5.0, -7.0];
        for &x in &[-2.5, -1.0, 0.0, 0.3, 1.7, 4.0] {
            let (v, d) = synthetic_division(&coeffs, x);
            let expected_d = 6.0 * x * x - 6.0 * x + 5.0;
            assert!((v - direct_value(&coeffs, x)).abs() < EPS, "value at {x}");
            assert!((d - expected_d).abs() < EPS, "derivative at {x}");
        }
    }

    #[test]
    fn quintic_matches_direct_evaluation() {
        let coeffs = [0.5, -1.25, 3.0, 0.0, -2.0, 1.0];
        let p = poly(&coeffs);
        let deriv = p.derivative_coefficients();
        for &x in &[-1.3, -0.2, 0.0, 0.9, 2.1] {
            let (v, d) = synthetic_division(&coeffs, x);
            assert!((v - direct_value(&coeffs, x)).abs() < 1e-10);
            assert!((d - direct_value(&deriv, x)).abs() < 1e-10);
        }
    }

    #[test]
    fn strategies_agree() {
        let p = poly(&[1.0, -6.0, 11.0, -6.0]);
        let synthetic = SyntheticDivision::new(&p);
        let differentiated = DifferentiatedForm::new(&p);
        for &x in &[-3.0, 0.5, 1.0, 2.5, 10.0] {
            let a = synthetic.evaluate(x);
            let b = differentiated.evaluate(x);
            assert!((a.value - b.value).abs() < 1e-9);
            assert!((a.derivative - b.derivative).abs() < 1e-9);
        }
    }

    #[test]
    fn overflow_propagates_as_non_finite() {
        let (v, _) = synthetic_division(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e100);
        assert!(!v.is_finite());
    }

    #[test]
    fn evaluator_through_reference() {
        let p = poly(&[1.0, 0.0, -4.0]);
        let e = SyntheticDivision::new(&p);
        let r: &dyn Evaluator = &e;
        assert_eq!(r.evaluate(2.0), e.evaluate(2.0));
    }
}
