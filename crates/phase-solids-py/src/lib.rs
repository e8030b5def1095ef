//! PyO3 bindings for the `phase-solids` function surface.
//!
//! Notes
//! - Points cross the boundary as plain tuples; signatures and default
//!   tolerances match the Python-facing names.
//! - Both library errors surface as `ValueError`.
//! - Diagnostics are dropped; callers get the verdicts only.

use pyo3::prelude::*;

mod common;
mod solids;
mod verify;

#[pymodule]
fn phase_solids_native(_py: Python, m: &PyModule) -> PyResult<()> {
    solids::register(m)?;
    verify::register(m)?;
    Ok(())
}
