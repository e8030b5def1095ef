//! Tolerance defaults for the verifier.
//!
//! Policy
//! - Defaults are fixed constants matching the historical entry points.
//!   Per-call overrides go through the `tolerance` arguments or `VerifyCfg`.

/// Default tolerance for `verify_edge_uniformity` (narrow band).
pub const EDGE_TOL: f64 = 1e-6;
/// Default tolerance for the legacy `verify_edge_lengths` (wide band).
pub const LEGACY_EDGE_TOL: f64 = 1e-5;
/// Default tolerance for `verify_on_sphere`.
pub const SPHERE_TOL: f64 = 1e-6;
/// Default tolerance for `check_golden_ratios`.
pub const GOLDEN_TOL: f64 = 1e-3;
/// Width of the wide candidate band, in multiples of the tolerance.
pub const WIDE_BAND_FACTOR: f64 = 10.0;
