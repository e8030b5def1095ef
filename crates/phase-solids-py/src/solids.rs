//! Rotor, projection, and catalog bindings.

use crate::common::{point_to_py, rotor_from_py, value_err, Tuple3, Tuple4};
use pyo3::prelude::*;

#[pyfunction]
pub fn generate_phase_rotor(n: i32) -> Tuple4 {
    let q = phase_solids::rotor::generate_phase_rotor(n);
    (q.x, q.y, q.z, q.w)
}

#[pyfunction]
pub fn stereographic_projection(q: Tuple4) -> PyResult<Tuple3> {
    phase_solids::rotor::stereographic_projection(rotor_from_py(q))
        .map(|p| point_to_py(&p))
        .map_err(value_err)
}

#[pyfunction]
pub fn generate_platonic_solid(name: &str) -> PyResult<Vec<Tuple3>> {
    let pts = phase_solids::solids::generate_platonic_solid(name).map_err(value_err)?;
    Ok(pts.iter().map(point_to_py).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_phase_rotor, m)?)?;
    m.add_function(wrap_pyfunction!(stereographic_projection, m)?)?;
    m.add_function(wrap_pyfunction!(generate_platonic_solid, m)?)?;
    Ok(())
}
