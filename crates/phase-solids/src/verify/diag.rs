//! Diagnostic side channel for the verifier.
//!
//! Every check emits one `Diagnostic` describing its outcome. Where it goes is
//! the caller's choice: `NullSink` drops it, `TracingSink` logs it, and a
//! `Vec<Diagnostic>` records it. Verdicts never depend on the sink.

use super::types::{EdgeMode, GoldenHit};

/// One verifier event.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// `verify_all` is about to run on `points` vertices.
    VerifyStart { points: usize },
    EdgesUniform {
        mode: EdgeMode,
        edges: usize,
        length: Option<f64>,
    },
    EdgesMismatched {
        mode: EdgeMode,
        max_deviation: f64,
        mismatched: Vec<f64>,
    },
    OnSphere { radius: f64 },
    OffSphere { radius: f64, max_deviation: f64 },
    GoldenFound(GoldenHit),
    GoldenMissing,
}

/// Receiver for verifier events.
pub trait DiagnosticSink {
    fn emit(&mut self, diag: Diagnostic);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline]
    fn emit(&mut self, _diag: Diagnostic) {}
}

/// Forwards events to `tracing`: passes at info, failures at warn.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diag: Diagnostic) {
        match diag {
            Diagnostic::VerifyStart { points } => {
                tracing::info!(points, "verifying point set")
            }
            Diagnostic::EdgesUniform {
                mode,
                edges,
                length,
            } => tracing::info!(%mode, edges, length = ?length, "all edges equal within tolerance"),
            Diagnostic::EdgesMismatched {
                mode,
                max_deviation,
                mismatched,
            } => tracing::warn!(
                %mode,
                max_deviation,
                mismatched = ?mismatched,
                "edge lengths differ by more than tolerance"
            ),
            Diagnostic::OnSphere { radius } => {
                tracing::info!(radius, "all vertices lie on a common sphere")
            }
            Diagnostic::OffSphere {
                radius,
                max_deviation,
            } => tracing::warn!(
                radius,
                max_deviation,
                "vertex distances from center vary beyond tolerance"
            ),
            Diagnostic::GoldenFound(hit) => tracing::info!(
                index = hit.index,
                axes = %hit.axes,
                ratio = hit.ratio,
                "golden ratio detected in coordinate ratios"
            ),
            Diagnostic::GoldenMissing => tracing::warn!("no golden ratio found within tolerance"),
        }
    }
}

/// Records events in order.
impl DiagnosticSink for Vec<Diagnostic> {
    #[inline]
    fn emit(&mut self, diag: Diagnostic) {
        self.push(diag);
    }
}
