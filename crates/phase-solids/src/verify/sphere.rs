//! Co-sphericity around the origin.

use super::diag::{Diagnostic, DiagnosticSink};
use super::types::SphereReport;
use crate::Point3;

/// Compare every vertex norm with the mean norm.
///
/// The mean stands in for a fitted circumradius. A vertex passes when its
/// deviation is strictly below `tol`. Empty input passes with radius 0.
pub fn sphere_report(points: &[Point3], tol: f64) -> SphereReport {
    if points.is_empty() {
        return SphereReport {
            passed: true,
            radius: 0.0,
            max_deviation: 0.0,
        };
    }
    let norms: Vec<f64> = points.iter().map(|p| p.norm()).collect();
    let radius = norms.iter().sum::<f64>() / norms.len() as f64;
    let mut passed = true;
    let mut max_deviation = 0.0_f64;
    for r in &norms {
        let dev = (r - radius).abs();
        passed &= dev < tol;
        max_deviation = max_deviation.max(dev);
    }
    SphereReport {
        passed,
        radius,
        max_deviation,
    }
}

impl SphereReport {
    pub fn diagnostic(&self) -> Diagnostic {
        if self.passed {
            Diagnostic::OnSphere {
                radius: self.radius,
            }
        } else {
            Diagnostic::OffSphere {
                radius: self.radius,
                max_deviation: self.max_deviation,
            }
        }
    }
}

/// True iff all points lie on the sphere of mean radius within `tolerance`.
pub fn verify_on_sphere(points: &[Point3], tolerance: f64, sink: &mut dyn DiagnosticSink) -> bool {
    let report = sphere_report(points, tolerance);
    sink.emit(report.diagnostic());
    report.passed
}
