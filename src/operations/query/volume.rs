use crate::tessellation::TriangleMesh;

/// Computes the signed volume enclosed by a triangle mesh.
///
/// Uses the signed tetrahedron method: for each triangle, computes
/// `(1/6) * v0 . (v1 x v2)` and sums over all triangles. Closed meshes with
/// outward-facing winding give a positive volume; inverted meshes give a
/// negative one. Open meshes give a number, not a volume.
pub struct Volume<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let signed: f64 = (0..self.mesh.triangle_count())
            .map(|i| {
                let [v0, v1, v2] = self.mesh.triangle(i);
                v0.coords.dot(&v1.coords.cross(&v2.coords))
            })
            .sum();
        signed / 6.0
    }
}
