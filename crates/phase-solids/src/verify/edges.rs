//! Edge uniformity from distance statistics.
//!
//! No edge list exists, so the shortest distances stand in for edges: every
//! distance inside a tolerance band above the global minimum is a candidate.
//! The band, not a fixed count, decides how many edges there are. This breaks
//! down when no clear gap separates the edge length from the next diagonal.

use super::cfg::WIDE_BAND_FACTOR;
use super::diag::{Diagnostic, DiagnosticSink};
use super::distances::pairwise_distances;
use super::types::{EdgeMode, EdgeReport};
use crate::Point3;

/// Classify candidate edges under `mode` and compare them within `tol`.
pub fn edge_report(points: &[Point3], tol: f64, mode: EdgeMode) -> EdgeReport {
    let dists = pairwise_distances(points);
    let Some(min_dist) = dists.iter().copied().reduce(f64::min) else {
        return EdgeReport::trivial(mode);
    };
    let band = match mode {
        EdgeMode::Narrow => tol,
        EdgeMode::Wide => WIDE_BAND_FACTOR * tol,
    };
    let candidates: Vec<f64> = dists
        .into_iter()
        .filter(|&d| d <= min_dist + band)
        .collect();
    // An empty wide band (negative or NaN tolerance) has nothing to disagree.
    if mode == EdgeMode::Wide && candidates.is_empty() {
        return EdgeReport {
            reference: Some(min_dist),
            ..EdgeReport::trivial(mode)
        };
    }
    let reference = match mode {
        EdgeMode::Narrow => min_dist,
        EdgeMode::Wide => candidates.iter().copied().fold(f64::INFINITY, f64::min),
    };
    let max_deviation = candidates
        .iter()
        .map(|d| (d - reference).abs())
        .fold(0.0, f64::max);
    let mismatched: Vec<f64> = candidates
        .iter()
        .copied()
        .filter(|d| (d - reference).abs() > tol)
        .collect();
    EdgeReport {
        passed: max_deviation <= tol,
        mode,
        reference: Some(reference),
        candidates,
        max_deviation,
        mismatched,
    }
}

impl EdgeReport {
    pub fn diagnostic(&self) -> Diagnostic {
        if self.passed {
            Diagnostic::EdgesUniform {
                mode: self.mode,
                edges: self.edge_count(),
                length: self.reference,
            }
        } else {
            Diagnostic::EdgesMismatched {
                mode: self.mode,
                max_deviation: self.max_deviation,
                mismatched: self.mismatched.clone(),
            }
        }
    }
}

/// Narrow-band edge check: candidates within `tolerance` of the shortest distance.
pub fn verify_edge_uniformity(
    points: &[Point3],
    tolerance: f64,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let report = edge_report(points, tolerance, EdgeMode::Narrow);
    sink.emit(report.diagnostic());
    report.passed
}

/// Legacy wide-band edge check: candidates within `10·tolerance` of the
/// shortest distance, compared against the smallest candidate.
pub fn verify_edge_lengths(
    points: &[Point3],
    tolerance: f64,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let report = edge_report(points, tolerance, EdgeMode::Wide);
    sink.emit(report.diagnostic());
    report.passed
}
