//! Real-root search for single-variable polynomials.
//!
//! This crate provides:
//! - Value-and-derivative evaluation by chained synthetic division
//!   (Horner / Briot-Ruffini), with a power-rule alternative
//! - Newton-Raphson refinement from a single starting point
//! - A multi-start sweep that refines many evenly spaced seeds and returns
//!   the distinct roots, sorted
//! - Descartes' rule of signs as an independent bound on root counts
//!
//! ```rust
//! use polyroot_core::{Polynomial, SweepConfig, descartes_bounds, find_real_roots};
//!
//! let p = Polynomial::new(vec![1.0, 0.0, -4.0]).unwrap();
//! let roots = find_real_roots(&p, &SweepConfig::coarse()).unwrap();
//! assert_eq!(roots.len(), 2);
//!
//! let bounds = descartes_bounds(&p);
//! assert!(bounds.admits(&roots.sign_summary()));
//! ```

pub mod config;
pub mod descartes;
pub mod error;
pub mod evaluator;
pub mod newton;
pub mod polynomial;
pub mod root_types;
pub mod sweep;

pub use config::{MAX_DISPLAY_PRECISION, NewtonConfig, SweepConfig};
pub use descartes::{SignBounds, count_sign_changes, descartes_bounds, reflect_coefficients};
pub use error::{NonConvergence, RootError};
pub use evaluator::{
    DifferentiatedForm, Evaluation, Evaluator, EvaluatorKind, SyntheticDivision, horner,
    synthetic_division,
};
pub use newton::{refine_root, round_to_precision};
pub use polynomial::Polynomial;
pub use root_types::{ErrorKind, RootCollection, RootRecord, RootSignSummary, ZERO_ROOT_THRESHOLD};
pub use sweep::{dedup_roots, find_real_roots, find_real_roots_with, seed_points};
