//! Golden-ratio probe on vertex coordinates.
//!
//! This is an existence check: one matching ratio on one vertex is enough.
//! A zero denominator leaves that ratio undefined, which counts as no match.

use super::diag::{Diagnostic, DiagnosticSink};
use super::types::{AxisPair, GoldenHit};
use crate::solids::phi;
use crate::Point3;

/// First `(vertex, axis pair)` whose absolute ratio is within `tol` of φ.
///
/// Vertices are scanned in order; per vertex the pairs are `x/y`, `y/z`, `x/z`.
pub fn find_golden_ratio(points: &[Point3], tol: f64) -> Option<GoldenHit> {
    let target = phi();
    points.iter().enumerate().find_map(|(index, p)| {
        AxisPair::ALL.into_iter().find_map(|axes| {
            let (num, den) = axes.axes();
            if p[den] == 0.0 {
                return None;
            }
            let ratio = (p[num] / p[den]).abs();
            ((ratio - target).abs() < tol).then_some(GoldenHit { index, axes, ratio })
        })
    })
}

/// True iff any vertex has any coordinate ratio within `tolerance` of φ.
pub fn check_golden_ratios(
    points: &[Point3],
    tolerance: f64,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    match find_golden_ratio(points, tolerance) {
        Some(hit) => {
            sink.emit(Diagnostic::GoldenFound(hit));
            true
        }
        None => {
            sink.emit(Diagnostic::GoldenMissing);
            false
        }
    }
}
