//! Phase rotors on the unit 3-sphere and stereographic projection to R³.
//!
//! Model
//! - A rotor for exponent `n` pairs the unit complex number `e^{iθ}` with its
//!   conjugate, `θ = π·2ⁿ`, and stores both as one vector in R⁴:
//!   `(cos θ, sin θ, cos θ, -sin θ)`, scaled onto S³.
//! - Projection is taken from the pole `(0, 0, 0, 1)`:
//!   `(x, y, z, w) ↦ (x, y, z) / (1 - w)`.
//!
//! Conventions
//! - The pole test is an exact comparison `1 - w == 0`. Inputs close to the
//!   pole project to large but finite points.
//! - For `n > 1023` the angle `π·2ⁿ` overflows `f64`. Such exponents give an
//!   exact multiple of 2π, so the rotor is built from `θ = 0`.

use std::fmt;

use crate::{Point3, Point4};

/// Stereographic projection failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionError {
    /// The input sits on the projection pole (`w == 1`).
    AtPole,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::AtPole => {
                write!(f, "stereographic projection undefined for w = 1")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Rotation angle `π·2ⁿ`, folded to 0 when it leaves the finite range.
#[inline]
fn phase_angle(n: i32) -> f64 {
    let theta = std::f64::consts::PI * 2f64.powi(n);
    if theta.is_finite() {
        theta
    } else {
        0.0
    }
}

/// Normalized 4D phase rotor on S³ for exponent `n`.
///
/// Post: `‖q‖ = 1` up to rounding, `q.x == q.z` and `q.y == -q.w`.
pub fn generate_phase_rotor(n: i32) -> Point4 {
    let theta = phase_angle(n);
    let (sin_t, cos_t) = theta.sin_cos();
    let q = Point4::new(cos_t, sin_t, cos_t, -sin_t);
    q / q.norm()
}

/// Project `q = (x, y, z, w)` from the pole `w = 1` into R³.
///
/// `q` need not be unit-norm; the formula is applied as is.
pub fn stereographic_projection(q: Point4) -> Result<Point3, ProjectionError> {
    let denom = 1.0 - q.w;
    if denom == 0.0 {
        return Err(ProjectionError::AtPole);
    }
    Ok(Point3::new(q.x / denom, q.y / denom, q.z / denom))
}

/// Rotor for `n` followed by its stereographic projection.
#[inline]
pub fn project_rotor(n: i32) -> Result<Point3, ProjectionError> {
    stereographic_projection(generate_phase_rotor(n))
}

/// Projected rotors for each exponent in `exponents`, in input order.
pub fn rotor_orbit<I>(exponents: I) -> Result<Vec<Point3>, ProjectionError>
where
    I: IntoIterator<Item = i32>,
{
    exponents.into_iter().map(project_rotor).collect()
}
