use crate::tessellation::TriangleMesh;

/// Validates the structural consistency of a mesh.
///
/// A valid mesh has at least one triangle, one normal per vertex, only
/// finite coordinates, and no index past the end of the vertex buffer. This
/// says nothing about closedness; see [`IsWatertight`](super::IsWatertight).
pub struct IsValid<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.problem().is_none()
    }

    /// Describes the first problem found, if any.
    #[must_use]
    pub fn problem(&self) -> Option<&'static str> {
        let mesh = self.mesh;
        if mesh.is_empty() {
            return Some("mesh has no triangles");
        }
        if mesh.normals.len() != mesh.vertices.len() {
            return Some("normal count differs from vertex count");
        }
        if !mesh.vertices.iter().all(|v| v.iter().all(|c| c.is_finite())) {
            return Some("non-finite vertex coordinate");
        }
        let n = mesh.vertices.len();
        if mesh
            .indices
            .iter()
            .flatten()
            .any(|&i| i as usize >= n)
        {
            return Some("triangle index out of range");
        }
        None
    }
}
