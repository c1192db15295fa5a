use std::f64::consts::TAU;

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Revolves a closed 2D profile 360 degrees around the Y axis into a mesh.
///
/// Profile points are `(radius, height)` pairs and the profile is implicitly
/// closed. A counter-clockwise profile (in the radius/height plane) yields an
/// outward-facing solid.
pub struct Revolve {
    profile: Vec<Point2>,
    segments: usize,
}

impl Revolve {
    /// Creates a new `Revolve` operation.
    #[must_use]
    pub fn new(profile: Vec<Point2>, segments: usize) -> Self {
        Self { profile, segments }
    }

    /// Executes the revolution.
    ///
    /// Each profile edge produces its own band of quads so that normals stay
    /// crisp at profile corners:
    /// - Edges lying on the axis produce nothing
    /// - Edges touching the axis at one end collapse into a triangle fan (a cap)
    /// - Seam vertices are shared between the first and last segment
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has fewer than 3 points or fewer than
    /// 3 segments are requested.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let n = self.profile.len();
        if n < 3 {
            return Err(TessellationError::InvalidParameters(
                "revolve profile must have at least 3 points".into(),
            )
            .into());
        }
        if self.segments < 3 {
            return Err(TessellationError::InvalidParameters(
                "revolve needs at least 3 segments".into(),
            )
            .into());
        }

        let radial: Vec<Vector3> = (0..self.segments)
            .map(|k| {
                let theta = TAU * k as f64 / self.segments as f64;
                Vector3::new(theta.cos(), 0.0, theta.sin())
            })
            .collect();

        let mut mesh = TriangleMesh::default();
        for i in 0..n {
            let p = self.profile[i];
            let q = self.profile[(i + 1) % n];
            let on_axis_p = p.x.abs() < TOLERANCE;
            let on_axis_q = q.x.abs() < TOLERANCE;
            if on_axis_p && on_axis_q {
                continue;
            }

            let dr = q.x - p.x;
            let dh = q.y - p.y;
            let len = dr.hypot(dh);
            if len < TOLERANCE {
                continue;
            }
            let (nr, nh) = (dh / len, -dr / len);

            let base = mesh.vertices.len() as u32;
            for dir in &radial {
                let normal = dir * nr + Vector3::y() * nh;
                mesh.push_vertex(point_at(p, dir), normal);
                mesh.push_vertex(point_at(q, dir), normal);
            }

            let seg = self.segments as u32;
            for k in 0..seg {
                let next = (k + 1) % seg;
                let a = base + 2 * k;
                let b = a + 1;
                let d = base + 2 * next;
                let c = d + 1;
                if !on_axis_q {
                    mesh.indices.push([a, b, c]);
                }
                if !on_axis_p {
                    mesh.indices.push([a, c, d]);
                }
            }
        }

        Ok(mesh)
    }
}

fn point_at(profile_point: Point2, radial: &Vector3) -> Point3 {
    Point3::new(
        radial.x * profile_point.x,
        profile_point.y,
        radial.z * profile_point.x,
    )
}
