//! Vertex tables for the five Platonic solids.
//!
//! Tables are fixed data, not normalized to a shared circumradius: cube and
//! tetrahedron vertices have norm √3, the octahedron has norm 1, and the
//! φ-based solids sit on their own spheres. Callers comparing solids must
//! rescale themselves.
//!
//! Each table is built once per process and shared as `&'static [Point3]`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::Point3;

/// Golden ratio `(1 + √5) / 2`, computed at full `f64` precision.
#[inline]
pub fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

/// Lookup failure for a solid name outside the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSolid {
    /// Lowercased name as it was looked up.
    pub name: String,
}

impl fmt::Display for UnknownSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown solid '{}'", self.name)
    }
}

impl std::error::Error for UnknownSolid {}

/// The five Platonic solids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solid {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl Solid {
    pub const ALL: [Solid; 5] = [
        Solid::Tetrahedron,
        Solid::Cube,
        Solid::Octahedron,
        Solid::Icosahedron,
        Solid::Dodecahedron,
    ];

    /// Lowercase catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Solid::Tetrahedron => "tetrahedron",
            Solid::Cube => "cube",
            Solid::Octahedron => "octahedron",
            Solid::Icosahedron => "icosahedron",
            Solid::Dodecahedron => "dodecahedron",
        }
    }

    /// Number of edges of the solid (not derivable from the vertex table alone).
    pub fn edge_count(self) -> usize {
        match self {
            Solid::Tetrahedron => 6,
            Solid::Cube | Solid::Octahedron => 12,
            Solid::Icosahedron | Solid::Dodecahedron => 30,
        }
    }

    /// Shared vertex table.
    pub fn vertices(self) -> &'static [Point3] {
        static TABLES: OnceLock<[Vec<Point3>; 5]> = OnceLock::new();
        let tables = TABLES.get_or_init(|| {
            [
                tetrahedron(),
                cube(),
                octahedron(),
                icosahedron(),
                dodecahedron(),
            ]
        });
        &tables[self as usize]
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solid {
    type Err = UnknownSolid;

    /// Case-insensitive match on the catalog name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Solid::ALL
            .into_iter()
            .find(|solid| solid.name() == name)
            .ok_or(UnknownSolid { name })
    }
}

/// Vertex table for `name` (case-insensitive).
pub fn generate_platonic_solid(name: &str) -> Result<&'static [Point3], UnknownSolid> {
    Ok(name.parse::<Solid>()?.vertices())
}

fn tetrahedron() -> Vec<Point3> {
    vec![
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
    ]
}

/// All sign patterns of `(±1, ±1, ±1)`, x-major with `+` before `-`.
fn cube() -> Vec<Point3> {
    let mut out = Vec::with_capacity(8);
    for &sx in &[1.0, -1.0] {
        for &sy in &[1.0, -1.0] {
            for &sz in &[1.0, -1.0] {
                out.push(Point3::new(sx, sy, sz));
            }
        }
    }
    out
}

fn octahedron() -> Vec<Point3> {
    vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ]
}

/// Cyclic permutations of `(0, ±1, ±φ)`.
fn icosahedron() -> Vec<Point3> {
    let p = phi();
    vec![
        Point3::new(0.0, 1.0, p),
        Point3::new(0.0, -1.0, p),
        Point3::new(0.0, 1.0, -p),
        Point3::new(0.0, -1.0, -p),
        Point3::new(1.0, p, 0.0),
        Point3::new(-1.0, p, 0.0),
        Point3::new(1.0, -p, 0.0),
        Point3::new(-1.0, -p, 0.0),
        Point3::new(p, 0.0, 1.0),
        Point3::new(-p, 0.0, 1.0),
        Point3::new(p, 0.0, -1.0),
        Point3::new(-p, 0.0, -1.0),
    ]
}

/// Cube corners plus cyclic permutations of `(0, ±1/φ, ±φ)`.
fn dodecahedron() -> Vec<Point3> {
    let p = phi();
    let ip = 1.0 / p;
    let mut out = cube();
    out.extend([
        Point3::new(0.0, ip, p),
        Point3::new(0.0, -ip, p),
        Point3::new(0.0, ip, -p),
        Point3::new(0.0, -ip, -p),
        Point3::new(p, 0.0, ip),
        Point3::new(-p, 0.0, ip),
        Point3::new(p, 0.0, -ip),
        Point3::new(-p, 0.0, -ip),
        Point3::new(ip, p, 0.0),
        Point3::new(-ip, p, 0.0),
        Point3::new(ip, -p, 0.0),
        Point3::new(-ip, -p, 0.0),
    ]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let upper = generate_platonic_solid("TETRAHEDRON").unwrap();
        let lower = generate_platonic_solid("tetrahedron").unwrap();
        let mixed = generate_platonic_solid("TetraHedron").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(mixed, lower);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = generate_platonic_solid("Sphere").unwrap_err();
        assert_eq!(err.name, "sphere");
        assert_eq!(err.to_string(), "unknown solid 'sphere'");
        assert!(generate_platonic_solid("").is_err());
        assert!(generate_platonic_solid(" cube").is_err());
    }

    #[test]
    fn vertex_counts() {
        let counts: Vec<usize> = Solid::ALL.iter().map(|s| s.vertices().len()).collect();
        assert_eq!(counts, vec![4, 8, 6, 12, 20]);
    }

    #[test]
    fn names_round_trip_through_parse() {
        for solid in Solid::ALL {
            assert_eq!(solid.name().parse::<Solid>(), Ok(solid));
            assert_eq!(solid.to_string(), solid.name());
        }
    }

    #[test]
    fn radii_are_not_normalized() {
        let sqrt3 = 3f64.sqrt();
        assert!(Solid::Cube.vertices().iter().all(|v| (v.norm() - sqrt3).abs() < 1e-12));
        assert!(Solid::Tetrahedron
            .vertices()
            .iter()
            .all(|v| (v.norm() - sqrt3).abs() < 1e-12));
        assert!(Solid::Octahedron.vertices().iter().all(|v| v.norm() == 1.0));
    }

    #[test]
    fn phi_satisfies_its_quadratic() {
        let p = phi();
        assert!((p * p - p - 1.0).abs() < 1e-15);
        assert!((1.0 / p - (p - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn tables_are_shared() {
        let a = Solid::Icosahedron.vertices();
        let b = generate_platonic_solid("icosahedron").unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
