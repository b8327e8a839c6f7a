//! Multi-start sweep: Newton refinement from evenly spaced seeds.
//!
//! Every seed in `[lower, upper]` is refined independently. Converged roots
//! are collected in seed order, near-duplicates are filtered out afterwards
//! by [`dedup_roots`], and the survivors are sorted ascending.
//!
//! This is a brute-force heuristic. It can miss roots outside the seed
//! interval, roots whose basin of attraction contains no seed, and it
//! merges distinct roots closer than the duplicate tolerance.

use tracing::{debug, trace};

use crate::config::SweepConfig;
use crate::error::RootError;
use crate::evaluator::{DifferentiatedForm, Evaluator, EvaluatorKind, SyntheticDivision};
use crate::newton::refine_root;
use crate::polynomial::Polynomial;
use crate::root_types::{RootCollection, RootRecord};

/// Evenly spaced seeds over the closed interval, endpoints included.
///
/// A single seed sits at `lower`.
pub fn seed_points(lower: f64, upper: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (upper - lower) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| lower + i as f64 * step)
}

/// Keep each root only if it is at least `tolerance` away from every root
/// kept before it. Input order decides which of two near-duplicates wins.
pub fn dedup_roots(candidates: Vec<RootRecord>, tolerance: f64) -> Vec<RootRecord> {
    let mut accepted: Vec<RootRecord> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let duplicate = accepted
            .iter()
            .any(|kept| (candidate.root - kept.root).abs() < tolerance);
        if !duplicate {
            accepted.push(candidate);
        }
    }
    accepted
}

/// Find the distinct real roots of `poly` reachable from the configured seeds.
///
/// An empty collection means no seed converged.
pub fn find_real_roots(poly: &Polynomial, config: &SweepConfig) -> Result<RootCollection, RootError> {
    config.validate().map_err(RootError::InvalidConfig)?;

    let roots = match config.evaluator {
        EvaluatorKind::SyntheticDivision => sweep(&SyntheticDivision::new(poly), config),
        EvaluatorKind::Differentiated => sweep(&DifferentiatedForm::new(poly), config),
    };
    debug!(degree = poly.degree(), distinct = roots.len(), "sweep finished");
    Ok(roots)
}

/// Run the sweep with a caller-supplied evaluator.
pub fn find_real_roots_with<E: Evaluator>(
    evaluator: &E,
    config: &SweepConfig,
) -> Result<RootCollection, RootError> {
    config.validate().map_err(RootError::InvalidConfig)?;
    Ok(sweep(evaluator, config))
}

fn sweep<E: Evaluator>(evaluator: &E, config: &SweepConfig) -> RootCollection {
    let mut converged = Vec::new();
    let mut failures = 0usize;

    for x0 in seed_points(config.lower, config.upper, config.seed_count) {
        match refine_root(evaluator, x0, &config.newton) {
            Ok(record) => converged.push(record),
            Err(reason) => {
                trace!(seed = x0, %reason, "seed did not converge");
                failures += 1;
            }
        }
    }

    debug!(
        seeds = config.seed_count,
        converged = converged.len(),
        failed = failures,
        "refinement pass done"
    );

    RootCollection::from_distinct(dedup_roots(converged, config.duplicate_tolerance))
}
