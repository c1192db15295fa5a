use crate::math::{Isometry3, Point3, Vector3, TOLERANCE};

/// Parameters controlling tessellation density of generated shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Circumferential segments of solid cylinders and tubes.
    pub cylinder_segments: usize,
    /// Circumferential segments of hole cutting tools.
    pub hole_segments: usize,
    /// Quads along the length of a curved-top box.
    pub curved_length_segments: usize,
    /// Quads across the width of a curved-top box.
    pub curved_width_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            cylinder_segments: 64,
            hole_segments: 32,
            curved_length_segments: 32,
            curved_width_segments: 16,
        }
    }
}

/// An indexed triangle mesh with per-vertex normals.
///
/// Triangles are wound counter-clockwise when viewed from outside the solid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the three corner positions of triangle `index`.
    #[must_use]
    pub fn triangle(&self, index: usize) -> [&Point3; 3] {
        let [a, b, c] = self.indices[index];
        [
            &self.vertices[a as usize],
            &self.vertices[b as usize],
            &self.vertices[c as usize],
        ]
    }

    /// Pushes a vertex and returns its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_vertex(&mut self, position: Point3, normal: Vector3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Appends another mesh, offsetting its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }

    /// Applies a rigid transform to every position and normal.
    pub fn transform(&mut self, isometry: &Isometry3) {
        for v in &mut self.vertices {
            *v = isometry * *v;
        }
        for n in &mut self.normals {
            *n = isometry.rotation * *n;
        }
    }

    /// Returns a transformed copy of the mesh.
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry3) -> Self {
        let mut mesh = self.clone();
        mesh.transform(isometry);
        mesh
    }

    /// Replaces each vertex normal with the area-weighted average of the
    /// normals of the triangles that reference it.
    ///
    /// Vertices touched only by degenerate triangles (or by none) keep
    /// their previous normal.
    pub fn recompute_normals(&mut self) {
        let mut sums = vec![Vector3::zeros(); self.vertices.len()];
        for &[a, b, c] in &self.indices {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            // Cross product length is twice the area: area weighting for free.
            let face = (self.vertices[b] - self.vertices[a])
                .cross(&(self.vertices[c] - self.vertices[a]));
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        }
        for (normal, sum) in self.normals.iter_mut().zip(sums) {
            if let Some(unit) = sum.try_normalize(TOLERANCE) {
                *normal = unit;
            }
        }
    }
}
