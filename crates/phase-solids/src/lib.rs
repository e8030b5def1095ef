//! Phase rotors on S³, their stereographic shadows in R³, and numerical checks
//! for the five Platonic solids.
//!
//! Layout
//! - `rotor`: doubling-angle rotors on the unit 3-sphere and the projection
//!   from the pole `w = 1`.
//! - `solids`: fixed vertex tables for the five Platonic solids.
//! - `verify`: pairwise distances, edge uniformity, co-sphericity and the
//!   golden-ratio probe.
//!
//! Point sets are plain slices of `Point3`; edges are never stored, they are
//! inferred from distance statistics.

pub mod rotor;
pub mod solids;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Point in R³ (vertex or projected sample).
pub type Point3 = nalgebra::Vector3<f64>;
/// Point in R⁴; rotors produced here are unit-norm.
pub type Point4 = nalgebra::Vector4<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rotor::{
        generate_phase_rotor, project_rotor, rotor_orbit, stereographic_projection,
        ProjectionError,
    };
    pub use crate::solids::{generate_platonic_solid, phi, Solid, UnknownSolid};
    pub use crate::verify::{
        check_golden_ratios, find_golden_ratio, full_verify, pairwise_distances, verify_all,
        verify_edge_lengths, verify_edge_uniformity, verify_on_sphere, Diagnostic,
        DiagnosticSink, EdgeMode, EdgeReport, FullReport, GoldenHit, NullSink, SphereReport,
        TracingSink, VerifyCfg,
    };
    pub use crate::{Point3, Point4};
}
