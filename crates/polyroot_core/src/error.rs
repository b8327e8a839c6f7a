//! Error types for polynomial root search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that reject a polynomial or a search configuration up front.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RootError {
    /// Coefficient list was empty.
    EmptyPolynomial,
    /// Coefficient at `index` is NaN or infinite.
    NonFiniteCoefficient { index: usize },
    /// Search configuration failed validation.
    InvalidConfig(&'static str),
}

impl Display for RootError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPolynomial => write!(f, "polynomial has no coefficients"),
            Self::NonFiniteCoefficient { index } => {
                write!(f, "coefficient at index {index} is not finite")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for RootError {}

/// Why a single Newton-Raphson refinement gave up.
///
/// The sweep treats this as "this seed found nothing" and moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NonConvergence {
    /// |P'(x)| fell below the tolerance at `x`.
    FlatDerivative { x: f64, derivative: f64 },
    /// The iteration cap was reached; `last_x` is the final iterate.
    IterationLimit { last_x: f64 },
}

impl Display for NonConvergence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FlatDerivative { x, derivative } => {
                write!(f, "derivative {derivative:e} too small at x = {x}")
            }
            Self::IterationLimit { last_x } => {
                write!(f, "iteration limit reached (last iterate {last_x})")
            }
        }
    }
}

impl Error for NonConvergence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            RootError::EmptyPolynomial.to_string(),
            "polynomial has no coefficients"
        );
        assert_eq!(
            RootError::NonFiniteCoefficient { index: 2 }.to_string(),
            "coefficient at index 2 is not finite"
        );
        assert_eq!(
            RootError::InvalidConfig("seed_count must be > 0").to_string(),
            "invalid config: seed_count must be > 0"
        );
        let msg = NonConvergence::IterationLimit { last_x: 1.5 }.to_string();
        assert!(msg.contains("1.5"));
    }
}
