//! Verifier bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{points_from_py, Tuple3};
use phase_solids::verify::{self, cfg, NullSink};
use pyo3::prelude::*;

#[pyfunction]
pub fn pairwise_distances(points: Vec<Tuple3>) -> Vec<f64> {
    verify::pairwise_distances(&points_from_py(points))
}

#[pyfunction]
#[pyo3(signature = (points, tolerance = cfg::LEGACY_EDGE_TOL))]
pub fn verify_edge_lengths(points: Vec<Tuple3>, tolerance: f64) -> bool {
    verify::verify_edge_lengths(&points_from_py(points), tolerance, &mut NullSink)
}

#[pyfunction]
#[pyo3(signature = (points, tolerance = cfg::EDGE_TOL))]
pub fn verify_edge_uniformity(points: Vec<Tuple3>, tolerance: f64) -> bool {
    verify::verify_edge_uniformity(&points_from_py(points), tolerance, &mut NullSink)
}

#[pyfunction]
#[pyo3(signature = (points, tolerance = cfg::SPHERE_TOL))]
pub fn verify_on_sphere(points: Vec<Tuple3>, tolerance: f64) -> bool {
    verify::verify_on_sphere(&points_from_py(points), tolerance, &mut NullSink)
}

#[pyfunction]
#[pyo3(signature = (points, tolerance = cfg::GOLDEN_TOL))]
pub fn check_golden_ratios(points: Vec<Tuple3>, tolerance: f64) -> bool {
    verify::check_golden_ratios(&points_from_py(points), tolerance, &mut NullSink)
}

#[pyfunction]
#[pyo3(signature = (points, tolerance = cfg::EDGE_TOL, check_phi = false))]
pub fn full_verify(points: Vec<Tuple3>, tolerance: f64, check_phi: bool) -> bool {
    verify::full_verify(&points_from_py(points), tolerance, check_phi, &mut NullSink)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pairwise_distances, m)?)?;
    m.add_function(wrap_pyfunction!(verify_edge_lengths, m)?)?;
    m.add_function(wrap_pyfunction!(verify_edge_uniformity, m)?)?;
    m.add_function(wrap_pyfunction!(verify_on_sphere, m)?)?;
    m.add_function(wrap_pyfunction!(check_golden_ratios, m)?)?;
    m.add_function(wrap_pyfunction!(full_verify, m)?)?;
    Ok(())
}
