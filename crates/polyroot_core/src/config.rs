//! Configuration for Newton refinement and the multi-start sweep.

use crate::evaluator::EvaluatorKind;

/// Largest display precision accepted; f64 carries ~15-17 significant digits.
pub const MAX_DISPLAY_PRECISION: u32 = 15;

/// Limits for a single Newton-Raphson refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Step size that counts as converged, and the |P'(x)| floor below which
    /// the refinement gives up (default 1e-12).
    pub tolerance: f64,
    /// Maximum Newton steps per seed (default 1000).
    pub max_iterations: u32,
    /// Decimal digits the converged root is rounded to (default 14).
    pub display_precision: u32,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 1000,
            display_precision: 14,
        }
    }
}

impl NewtonConfig {
    /// Validate the configuration.
    ///
    /// [`refine_root`](crate::newton::refine_root) assumes a valid config;
    /// callers refining outside a sweep check it here first.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err("display_precision must be <= 15");
        }
        Ok(())
    }
}

/// Seed layout and deduplication for the multi-start sweep.
///
/// The interval and seed counts are fixed defaults, not derived from the
/// polynomial. Roots outside `[lower, upper]` are only found if some seed's
/// Newton path wanders out to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First seed (inclusive).
    pub lower: f64,
    /// Last seed (inclusive).
    pub upper: f64,
    /// Number of evenly spaced seeds, endpoints included.
    pub seed_count: usize,
    /// Roots closer than this are the same root (default 1e-5).
    pub duplicate_tolerance: f64,
    /// Evaluation strategy for P and P'.
    pub evaluator: EvaluatorKind,
    pub newton: NewtonConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::coarse()
    }
}

impl SweepConfig {
    /// 1000 seeds over [-500, 500].
    pub fn coarse() -> Self {
        Self {
            lower: -500.0,
            upper: 500.0,
            seed_count: 1000,
            duplicate_tolerance: 1e-5,
            evaluator: EvaluatorKind::SyntheticDivision,
            newton: NewtonConfig::default(),
        }
    }

    /// 10001 seeds over [-500, 500] (0.1 spacing).
    pub fn dense() -> Self {
        Self {
            seed_count: 10_001,
            ..Self::coarse()
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err("seed interval bounds must be finite");
        }
        if self.lower > self.upper {
            return Err("lower bound must not exceed upper bound");
        }
        if self.seed_count == 0 {
            return Err("seed_count must be > 0");
        }
        if !self.duplicate_tolerance.is_finite() || self.duplicate_tolerance <= 0.0 {
            return Err("duplicate_tolerance must be positive");
        }
        self.newton.validate()
    }
}
