//! Coefficient parsing for command-line and stdin input.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed coefficient text.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// No numbers were given.
    Empty,
    /// A token did not parse as a number.
    InvalidNumber(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no coefficients given"),
            Self::InvalidNumber(tok) => {
                write!(f, "not a number: '{tok}' (enter numbers separated by spaces)")
            }
        }
    }
}

impl Error for InputError {}

/// Parse whitespace-separated coefficients, highest degree first.
///
/// A comma is read as a decimal separator, so `1,5` is 1.5.
pub fn parse_coefficients(text: &str) -> Result<Vec<f64>, InputError> {
    let normalized = text.replace(',', ".");
    let coeffs = normalized
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| InputError::InvalidNumber(tok.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coeffs.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_negatives() {
        assert_eq!(parse_coefficients("1 0 -4"), Ok(vec![1.0, 0.0, -4.0]));
    }

    #[test]
    fn comma_is_decimal_separator() {
        assert_eq!(parse_coefficients("1,5 -2,25"), Ok(vec![1.5, -2.25]));
    }

    #[test]
    fn extra_whitespace_ignored() {
        assert_eq!(parse_coefficients("  2\t-3 \n"), Ok(vec![2.0, -3.0]));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(parse_coefficients("1e3 -2.5E-1"), Ok(vec![1000.0, -0.25]));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_coefficients("   "), Err(InputError::Empty));
    }

    #[test]
    fn bad_token_reported() {
        assert_eq!(
            parse_coefficients("1 x 3"),
            Err(InputError::InvalidNumber("x".to_string()))
        );
    }
}
