use crate::math::intersect_3d::ray_triangle_intersect;
use crate::math::{Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Hits closer than this along the ray are reported once.
const HIT_MERGE_DISTANCE: f64 = 1e-7;

/// Casts a ray against every triangle of a mesh.
///
/// A ray through a shared edge or vertex touches several triangles at the
/// same distance; those hits are merged so each surface crossing is counted
/// once.
pub struct RayCast<'a> {
    mesh: &'a TriangleMesh,
    origin: Point3,
    direction: Vector3,
}

impl<'a> RayCast<'a> {
    /// Creates a new `RayCast` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh, origin: Point3, direction: Vector3) -> Self {
        Self {
            mesh,
            origin,
            direction,
        }
    }

    /// Executes the query, returning hit distances in ascending order.
    ///
    /// Distances are in units of `direction`'s length.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        let mut hits: Vec<f64> = (0..self.mesh.triangle_count())
            .filter_map(|i| {
                ray_triangle_intersect(&self.origin, &self.direction, self.mesh.triangle(i))
            })
            .collect();
        hits.sort_by(f64::total_cmp);
        hits.dedup_by(|a, b| (*a - *b).abs() < HIT_MERGE_DISTANCE);
        hits
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::creation::MakeBox;

    #[test]
    fn ray_through_box_hits_two_faces() {
        let mesh = MakeBox::new(4.0, 4.0, 2.0).execute();
        let hits = RayCast::new(&mesh, Point3::new(0.3, 10.0, 0.7), -Vector3::y()).execute();
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0], 9.0, epsilon = 1e-9);
        assert_relative_eq!(hits[1], 11.0, epsilon = 1e-9);
    }

    #[test]
    fn ray_along_face_diagonal_is_counted_once() {
        let mesh = MakeBox::new(4.0, 4.0, 2.0).execute();
        // (0, 0) lies on the diagonal splitting the top and bottom quads.
        let hits = RayCast::new(&mesh, Point3::new(0.0, 10.0, 0.0), -Vector3::y()).execute();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn ray_beside_box_misses() {
        let mesh = MakeBox::new(4.0, 4.0, 2.0).execute();
        let hits = RayCast::new(&mesh, Point3::new(5.0, 10.0, 0.0), -Vector3::y()).execute();
        assert!(hits.is_empty());
    }
}
