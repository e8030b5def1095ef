//! Verification modes, configuration, and the reports each check returns.
//!
//! Reports are plain values: a verdict plus the numbers behind it. They carry
//! everything a caller needs to explain a failure, so the diagnostic sink is
//! never the only place a deviation shows up.

use std::fmt;

use super::cfg::{EDGE_TOL, GOLDEN_TOL};

/// Edge-candidate strategy.
///
/// - `Narrow`: candidates are distances within `tol` of the global minimum;
///   deviations are measured against that minimum.
/// - `Wide`: candidates are distances within `10·tol` of the global minimum;
///   deviations are measured against the smallest candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    #[default]
    Narrow,
    Wide,
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeMode::Narrow => f.write_str("narrow"),
            EdgeMode::Wide => f.write_str("wide"),
        }
    }
}

/// Runtime configuration for `verify_all`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerifyCfg {
    /// Tolerance for the edge and sphere checks.
    pub tolerance: f64,
    pub edge_mode: EdgeMode,
    /// Run the golden-ratio probe as part of the verdict.
    pub check_phi: bool,
    pub golden_tolerance: f64,
}

impl Default for VerifyCfg {
    fn default() -> Self {
        Self {
            tolerance: EDGE_TOL,
            edge_mode: EdgeMode::Narrow,
            check_phi: false,
            golden_tolerance: GOLDEN_TOL,
        }
    }
}

/// Result of the edge-uniformity check.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeReport {
    pub passed: bool,
    pub mode: EdgeMode,
    /// Length the candidates were compared against; `None` for fewer than two points.
    pub reference: Option<f64>,
    /// Distances classified as edges, in pair order `(0,1), (0,2), …`.
    pub candidates: Vec<f64>,
    pub max_deviation: f64,
    /// Candidates deviating from `reference` by more than the tolerance.
    pub mismatched: Vec<f64>,
}

impl EdgeReport {
    /// Pass with no data (fewer than two points).
    pub(crate) fn trivial(mode: EdgeMode) -> Self {
        Self {
            passed: true,
            mode,
            reference: None,
            candidates: Vec::new(),
            max_deviation: 0.0,
            mismatched: Vec::new(),
        }
    }

    /// Number of distances classified as edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Result of the co-sphericity check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereReport {
    pub passed: bool,
    /// Mean vertex norm, used as the sphere radius.
    pub radius: f64,
    pub max_deviation: f64,
}

/// Coordinate pair whose ratio is probed for φ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPair {
    XY,
    YZ,
    XZ,
}

impl AxisPair {
    /// Probe order per vertex.
    pub const ALL: [AxisPair; 3] = [AxisPair::XY, AxisPair::YZ, AxisPair::XZ];

    /// `(numerator, denominator)` axis indices.
    #[inline]
    pub fn axes(self) -> (usize, usize) {
        match self {
            AxisPair::XY => (0, 1),
            AxisPair::YZ => (1, 2),
            AxisPair::XZ => (0, 2),
        }
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisPair::XY => f.write_str("x/y"),
            AxisPair::YZ => f.write_str("y/z"),
            AxisPair::XZ => f.write_str("x/z"),
        }
    }
}

/// First vertex ratio found within tolerance of φ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldenHit {
    /// Index of the vertex in the input slice.
    pub index: usize,
    pub axes: AxisPair,
    /// Absolute coordinate ratio.
    pub ratio: f64,
}

/// Combined result of `verify_all`.
#[derive(Clone, Debug, PartialEq)]
pub struct FullReport {
    pub edges: EdgeReport,
    pub sphere: SphereReport,
    /// Whether the golden-ratio probe was part of this run.
    pub golden_checked: bool,
    pub golden: Option<GoldenHit>,
}

impl FullReport {
    /// Golden verdict; vacuously true when the probe was not requested.
    #[inline]
    pub fn golden_passed(&self) -> bool {
        !self.golden_checked || self.golden.is_some()
    }

    /// Logical AND of all requested checks.
    pub fn passed(&self) -> bool {
        self.edges.passed && self.sphere.passed && self.golden_passed()
    }
}
