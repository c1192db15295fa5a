use crate::math::{Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Creates a rectangular prism centered on the origin.
///
/// Length runs along X, height along Y, width along Z. Each face carries its
/// own four vertices so normals stay flat.
pub struct MakeBox {
    length: f64,
    width: f64,
    height: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Executes the operation, returning a closed 12-triangle mesh.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let hx = self.length * 0.5;
        let hy = self.height * 0.5;
        let hz = self.width * 0.5;

        // Each face: outward normal, then corners counter-clockwise seen from outside.
        let faces: [(Vector3, [[f64; 3]; 4]); 6] = [
            (Vector3::x(), [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz]]),
            (-Vector3::x(), [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]]),
            (Vector3::y(), [[-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz], [-hx, hy, -hz]]),
            (-Vector3::y(), [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]]),
            (Vector3::z(), [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]]),
            (-Vector3::z(), [[hx, -hy, -hz], [-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz]]),
        ];

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(24);
        mesh.normals.reserve(24);
        mesh.indices.reserve(12);
        for (normal, corners) in faces {
            let [a, b, c, d] = corners.map(|[x, y, z]| mesh.push_vertex(Point3::new(x, y, z), normal));
            mesh.indices.push([a, b, c]);
            mesh.indices.push([a, c, d]);
        }
        mesh
    }
}
