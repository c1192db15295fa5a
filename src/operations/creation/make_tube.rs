use crate::error::Result;
use crate::math::Point2;
use crate::operations::shaping::Revolve;
use crate::tessellation::TriangleMesh;

/// Creates a hollow tube centered on the origin with its axis along Y.
///
/// A single rectangular cross-section
/// (inner-bottom -> outer-bottom -> outer-top -> inner-top) is revolved, so the
/// inner wall, outer wall, and both end annuli come out of one loft and share
/// their seam vertices without any cap stitching.
pub struct MakeTube {
    outer_radius: f64,
    inner_radius: f64,
    length: f64,
    segments: usize,
}

impl MakeTube {
    /// Creates a new `MakeTube` operation.
    #[must_use]
    pub fn new(outer_radius: f64, inner_radius: f64, length: f64, segments: usize) -> Self {
        Self {
            outer_radius,
            inner_radius,
            length,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 segments are requested.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let h = self.length * 0.5;
        let profile = vec![
            Point2::new(self.inner_radius, -h),
            Point2::new(self.outer_radius, -h),
            Point2::new(self.outer_radius, h),
            Point2::new(self.inner_radius, h),
        ];
        Revolve::new(profile, self.segments).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::query::{BoundingBox, IsWatertight, Volume};

    #[test]
    fn tube_lies_along_y() {
        let mesh = MakeTube::new(25.0, 15.0, 120.0, 64).execute().unwrap();
        let aabb = BoundingBox::new(&mesh).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-25.0, -60.0, -25.0), epsilon = 1e-9);
        assert_relative_eq!(aabb.max, Point3::new(25.0, 60.0, 25.0), epsilon = 1e-9);
    }

    #[test]
    fn cross_section_has_two_radii() {
        let mesh = MakeTube::new(25.0, 15.0, 120.0, 64).execute().unwrap();
        let mut seen_inner = false;
        let mut seen_outer = false;
        for v in &mesh.vertices {
            let r = v.x.hypot(v.z);
            if (r - 15.0).abs() < 1e-9 {
                seen_inner = true;
            } else if (r - 25.0).abs() < 1e-9 {
                seen_outer = true;
            } else {
                panic!("vertex {v} off both walls (r = {r})");
            }
        }
        assert!(seen_inner && seen_outer);
    }

    #[test]
    fn tube_is_watertight_with_annular_volume() {
        let mesh = MakeTube::new(25.0, 15.0, 120.0, 64).execute().unwrap();
        assert!(IsWatertight::new(&mesh).execute());

        let factor = (TAU / 64.0).sin() * 64.0 / TAU;
        let expected = PI * (625.0 - 225.0) * 120.0 * factor;
        assert_relative_eq!(Volume::new(&mesh).execute(), expected, max_relative = 1e-9);
    }

    #[test]
    fn inner_wall_faces_the_axis() {
        let mesh = MakeTube::new(25.0, 15.0, 120.0, 16).execute().unwrap();
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            let r = v.x.hypot(v.z);
            if (r - 15.0).abs() < 1e-9 && n.y.abs() < 1e-9 {
                assert!(n.x * v.x + n.z * v.z < 0.0);
            }
        }
    }
}
