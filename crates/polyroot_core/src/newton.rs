//! Newton-Raphson refinement from a single starting point.
//!
//! Iterates x_{n+1} = x_n − P(x_n) / P'(x_n) until the step drops below the
//! tolerance. Gives up when |P'(x_n)| falls below the same tolerance or
//! when the iteration cap is reached. Pure: nothing is kept between calls.

use crate::config::NewtonConfig;
use crate::error::NonConvergence;
use crate::evaluator::Evaluator;
use crate::root_types::{ErrorKind, RootRecord, ZERO_ROOT_THRESHOLD};

/// Beyond 2^52 every f64 is already an integer, so scaling cannot round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round `x` to `digits` decimal places.
///
/// Values whose scaled magnitude is too large to carry a fractional part
/// are returned unchanged.
pub fn round_to_precision(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return x;
    }
    scaled.round() / scale
}

/// Refine a root of the evaluator's polynomial starting at `x0`.
///
/// On convergence the root is rounded to `config.display_precision`
/// digits; the error is the final step size, reported as absolute when the
/// rounded root is within 1e-9 of zero and relative otherwise.
///
/// Configuration is assumed valid; the sweep checks it once up front.
pub fn refine_root<E: Evaluator>(
    evaluator: &E,
    x0: f64,
    config: &NewtonConfig,
) -> Result<RootRecord, NonConvergence> {
    let tol = config.tolerance;
    let mut x_n = x0;

    for _ in 0..config.max_iterations {
        let eval = evaluator.evaluate(x_n);

        if eval.derivative.abs() < tol {
            return Err(NonConvergence::FlatDerivative {
                x: x_n,
                derivative: eval.derivative,
            });
        }

        let x_next = x_n - eval.value / eval.derivative;
        let step = (x_next - x_n).abs();

        if step < tol {
            let root = round_to_precision(x_next, config.display_precision);
            let (error, error_kind) = if root.abs() < ZERO_ROOT_THRESHOLD {
                (step, ErrorKind::Absolute)
            } else {
                (step / x_next.abs(), ErrorKind::Relative)
            };
            return Ok(RootRecord {
                root,
                error,
                error_kind,
            });
        }

        x_n = x_next;
    }

    Err(NonConvergence::IterationLimit { last_x: x_n })
}
