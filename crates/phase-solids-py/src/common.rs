use nalgebra::{Vector3, Vector4};
use phase_solids::Point3;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub type Tuple3 = (f64, f64, f64);
pub type Tuple4 = (f64, f64, f64, f64);

pub fn points_from_py(points: Vec<Tuple3>) -> Vec<Point3> {
    points
        .into_iter()
        .map(|(x, y, z)| Vector3::new(x, y, z))
        .collect()
}

pub fn point_to_py(p: &Point3) -> Tuple3 {
    (p.x, p.y, p.z)
}

pub fn rotor_from_py(q: Tuple4) -> Vector4<f64> {
    Vector4::new(q.0, q.1, q.2, q.3)
}

pub fn value_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}
