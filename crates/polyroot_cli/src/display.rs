//! Text rendering of roots, errors, and Descartes predictions.

use polyroot_core::{RootRecord, RootSignSummary, SignBounds};

/// Distance from an integer within which a root prints as that integer.
const INTEGER_SNAP: f64 = 1e-5;

/// Root as an integer when within 1e-5 of one, else with `precision` decimals.
pub fn format_root(root: f64, precision: usize) -> String {
    let nearest = root.round();
    if (root - nearest).abs() < INTEGER_SNAP {
        // adding 0.0 turns -0.0 into 0.0
        format!("{}", nearest + 0.0)
    } else {
        format!("{root:.precision$}")
    }
}

/// Error in scientific notation with two mantissa decimals.
pub fn format_error(error: f64) -> String {
    format!("{error:.2e}")
}

/// Admissible counts joined for display, e.g. `3, 1`.
pub fn format_counts(counts: &[usize]) -> String {
    counts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_record(record: &RootRecord, precision: usize) -> String {
    format!(
        "  Root: {}\n  {} error: {}",
        format_root(record.root, precision),
        capitalize(record.error_kind.as_str()),
        format_error(record.error)
    )
}

pub fn render_bounds(bounds: &SignBounds) -> String {
    format!(
        "Descartes' rule of signs:\n  Possible positive real roots: {}\n  Possible negative real roots: {}",
        format_counts(&bounds.possible_positive()),
        format_counts(&bounds.possible_negative())
    )
}

pub fn render_summary(summary: &RootSignSummary) -> String {
    format!(
        "Summary of real roots found:\n  Positive: {}\n  Negative: {}\n  Zero: {}",
        summary.positive, summary.negative, summary.zero
    )
}

/// Tuning advice printed when the sweep comes back empty.
pub const NO_ROOTS_HINT: &str = "No real roots were found from the tested starting points.\n\
Hint: widen the seed interval (--lower/--upper) or add seeds (--seeds, --dense).\n\
You can also lower --tolerance or raise --max-iterations; both make the search slower.";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
