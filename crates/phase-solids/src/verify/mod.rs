//! Numerical checks on vertex sets (edge uniformity, co-sphericity, φ ratios).
//!
//! Purpose
//! - Decide whether a point set looks like a regular solid without knowing its
//!   combinatorics: edges are the shortest pairwise distances, the sphere is the
//!   mean vertex norm.
//!
//! Conventions
//! - All checks are pure; repeated calls on the same input give equal reports.
//! - Fewer than two points pass the edge check trivially; an empty set passes
//!   the sphere check.
//! - Each boolean entry point emits exactly one `Diagnostic` per check to the
//!   sink it is handed. Pass `&mut NullSink` to stay silent.
//! - Two edge strategies coexist (`EdgeMode::Narrow`, `EdgeMode::Wide`); both
//!   are public because existing callers depend on each.

pub mod cfg;
mod diag;
mod distances;
mod edges;
mod golden;
mod sphere;
mod types;

pub use diag::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use distances::pairwise_distances;
pub use edges::{edge_report, verify_edge_lengths, verify_edge_uniformity};
pub use golden::{check_golden_ratios, find_golden_ratio};
pub use sphere::{sphere_report, verify_on_sphere};
pub use types::{AxisPair, EdgeMode, EdgeReport, FullReport, GoldenHit, SphereReport, VerifyCfg};

use crate::Point3;

/// Run the edge and sphere checks, plus the φ probe when `cfg.check_phi`.
pub fn verify_all(
    points: &[Point3],
    cfg: &VerifyCfg,
    sink: &mut dyn DiagnosticSink,
) -> FullReport {
    sink.emit(Diagnostic::VerifyStart {
        points: points.len(),
    });
    let edges = edge_report(points, cfg.tolerance, cfg.edge_mode);
    sink.emit(edges.diagnostic());
    let sphere = sphere_report(points, cfg.tolerance);
    sink.emit(sphere.diagnostic());
    let golden = if cfg.check_phi {
        let hit = find_golden_ratio(points, cfg.golden_tolerance);
        sink.emit(match hit {
            Some(hit) => Diagnostic::GoldenFound(hit),
            None => Diagnostic::GoldenMissing,
        });
        hit
    } else {
        None
    };
    FullReport {
        edges,
        sphere,
        golden_checked: cfg.check_phi,
        golden,
    }
}

/// Narrow edge check and sphere check at `tolerance`; φ probe (at
/// `cfg::GOLDEN_TOL`) only when `check_phi`. Returns the AND of what ran.
pub fn full_verify(
    points: &[Point3],
    tolerance: f64,
    check_phi: bool,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let cfg = VerifyCfg {
        tolerance,
        check_phi,
        ..VerifyCfg::default()
    };
    verify_all(points, &cfg, sink).passed()
}
