//! Validated real-coefficient polynomial.

use crate::error::RootError;

/// A single-variable polynomial with real coefficients, highest degree first.
///
/// `[1.0, 0.0, -4.0]` is x² − 4. Always holds at least one coefficient and
/// every coefficient is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial, rejecting empty or non-finite coefficient lists.
    ///
    /// Leading zeros are kept as given; the degree is always `len - 1`.
    pub fn new(coeffs: Vec<f64>) -> Result<Self, RootError> {
        if coeffs.is_empty() {
            return Err(RootError::EmptyPolynomial);
        }
        if let Some(index) = coeffs.iter().position(|c| !c.is_finite()) {
            return Err(RootError::NonFiniteCoefficient { index });
        }
        Ok(Self { coeffs })
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// True for a degree-0 polynomial (its derivative is identically zero).
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Degree of the term at coefficient `index`.
    pub fn term_degree(&self, index: usize) -> usize {
        self.degree() - index
    }

    /// Power-rule derivative coefficients, highest degree first.
    ///
    /// Returns `[0.0]` for a constant so the result is itself a valid
    /// coefficient list.
    pub fn derivative_coefficients(&self) -> Vec<f64> {
        if self.is_constant() {
            return vec![0.0];
        }
        let n = self.degree();
        self.coeffs[..n]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * (n - i) as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(Polynomial::new(vec![]), Err(RootError::EmptyPolynomial));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert_eq!(
            Polynomial::new(vec![1.0, f64::NAN]),
            Err(RootError::NonFiniteCoefficient { index: 1 })
        );
        assert_eq!(
            Polynomial::new(vec![f64::INFINITY, 2.0]),
            Err(RootError::NonFiniteCoefficient { index: 0 })
        );
    }

    #[test]
    fn degree_and_term_degree() {
        let p = Polynomial::new(vec![1.0, -3.0, 3.0, -1.0]).unwrap();
        assert_eq!(p.degree(), 3);
        assert_eq!(p.term_degree(0), 3);
        assert_eq!(p.term_degree(3), 0);
        assert!(!p.is_constant());
    }

    #[test]
    fn constant_polynomial() {
        let p = Polynomial::new(vec![7.0]).unwrap();
        assert_eq!(p.degree(), 0);
        assert!(p.is_constant());
        assert_eq!(p.derivative_coefficients(), vec![0.0]);
    }

    #[test]
    fn derivative_of_cubic() {
        // 2x³ − 3x² + 5x − 7 → 6x² − 6x + 5
        let p = Polynomial::new(vec![2.0, -3.0, 5.0, -7.0]).unwrap();
        assert_eq!(p.derivative_coefficients(), vec![6.0, -6.0, 5.0]);
    }

    #[test]
    fn leading_zero_kept() {
        let p = Polynomial::new(vec![0.0, 1.0, -2.0]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficients(), &[0.0, 1.0, -2.0]);
    }
}
