pub mod intersect_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid transform (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Rotation stored as a unit quaternion.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Snaps a point onto an integer lattice of spacing `quantum`.
///
/// Points closer than `quantum / 2` on every axis share a key, which is
/// enough to weld vertices produced by identical arithmetic.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lattice_key(p: &Point3, quantum: f64) -> [i64; 3] {
    [
        (p.x / quantum).round() as i64,
        (p.y / quantum).round() as i64,
        (p.z / quantum).round() as i64,
    ]
}
