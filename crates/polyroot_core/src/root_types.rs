//! Types for refined roots and their collections.

/// Magnitude below which a root counts as zero, both for choosing an
/// absolute error and for sign classification.
pub const ZERO_ROOT_THRESHOLD: f64 = 1e-9;

/// How [`RootRecord::error`] is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// |Δx| / |x|, used when the root is away from zero.
    Relative,
    /// |Δx|, used when the root is within [`ZERO_ROOT_THRESHOLD`] of zero.
    Absolute,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

/// A converged root with the size of its final Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootRecord {
    /// Root value, rounded to the configured display precision.
    pub root: f64,
    /// Final step size, absolute or relative per `error_kind`.
    pub error: f64,
    pub error_kind: ErrorKind,
}

/// Distinct real roots, sorted ascending by value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootCollection {
    roots: Vec<RootRecord>,
}

impl RootCollection {
    /// Wrap already-deduplicated records, sorting them by root value.
    pub(crate) fn from_distinct(mut roots: Vec<RootRecord>) -> Self {
        roots.sort_by(|a, b| a.root.total_cmp(&b.root));
        Self { roots }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the sweep found nothing. Callers usually react by widening
    /// the seed interval, adding seeds, or relaxing the refiner limits.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RootRecord> {
        self.roots.iter()
    }

    pub fn as_slice(&self) -> &[RootRecord] {
        &self.roots
    }

    /// Root values only, ascending.
    pub fn values(&self) -> Vec<f64> {
        self.roots.iter().map(|r| r.root).collect()
    }

    /// Count roots by sign.
    pub fn sign_summary(&self) -> RootSignSummary {
        let mut summary = RootSignSummary::default();
        for r in &self.roots {
            if r.root > ZERO_ROOT_THRESHOLD {
                summary.positive += 1;
            } else if r.root < -ZERO_ROOT_THRESHOLD {
                summary.negative += 1;
            } else {
                summary.zero += 1;
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a RootCollection {
    type Item = &'a RootRecord;
    type IntoIter = std::slice::Iter<'a, RootRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl IntoIterator for RootCollection {
    type Item = RootRecord;
    type IntoIter = std::vec::IntoIter<RootRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

/// Numbers of found roots that are positive, negative, and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RootSignSummary {
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
}
