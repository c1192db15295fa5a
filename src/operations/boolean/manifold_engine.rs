use std::collections::HashMap;

use manifold_rs::{Manifold, Mesh};

use crate::error::{BooleanError, Result};
use crate::math::{lattice_key, Point3, Vector3};
use crate::operations::placement::PlacementFrame;
use crate::operations::query::BoundingBox;
use crate::tessellation::TriangleMesh;

use super::engine::SubtractionEngine;

/// Input vertices closer than this are merged before handing the mesh over.
const WELD_QUANTUM: f64 = 1e-9;

/// Subtraction backed by the Manifold geometry kernel.
///
/// Both operands must be closed, outward-wound meshes. Patches that duplicate
/// boundary vertices are merged by position first, since the kernel only
/// accepts a shared-vertex manifold. The result is manifold, with vertices
/// split along creases so each side keeps its own normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifoldEngine;

impl ManifoldEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SubtractionEngine for ManifoldEngine {
    fn subtract(
        &self,
        target: &TriangleMesh,
        tool: &TriangleMesh,
        placement: &PlacementFrame,
    ) -> Result<TriangleMesh> {
        let tool = tool.transformed(&placement.isometry());

        let target_box = BoundingBox::new(target)
            .execute()
            .map_err(|_| BooleanError::EmptyOperand { operand: "target" })?;
        let tool_box = BoundingBox::new(&tool)
            .execute()
            .map_err(|_| BooleanError::EmptyOperand { operand: "tool" })?;
        if !target_box.overlaps(&tool_box) {
            tracing::trace!("tool misses target bounds, nothing to cut");
            return Ok(target.clone());
        }

        let a = to_manifold(target);
        if a.is_empty() {
            return Err(BooleanError::EmptyOperand { operand: "target" }.into());
        }
        let b = to_manifold(&tool);
        if b.is_empty() {
            return Err(BooleanError::EmptyOperand { operand: "tool" }.into());
        }

        let difference = a.difference(&b);
        if difference.is_empty() {
            return Err(BooleanError::EmptyResult.into());
        }
        let result = from_manifold(&difference);
        tracing::trace!(triangles = result.triangle_count(), "manifold difference complete");
        if result.is_empty() {
            return Err(BooleanError::EmptyResult.into());
        }
        Ok(result)
    }
}

/// Welds `mesh` by position and builds a kernel solid from it.
///
/// Triangles that collapse under welding are dropped. A mesh the kernel
/// rejects comes back as an empty solid.
#[allow(clippy::cast_possible_truncation)]
fn to_manifold(mesh: &TriangleMesh) -> Manifold {
    let mut ids: HashMap<[i64; 3], u32> = HashMap::new();
    let mut positions: Vec<f32> = Vec::with_capacity(mesh.vertices.len() * 3);
    let welded: Vec<u32> = mesh
        .vertices
        .iter()
        .map(|v| {
            *ids.entry(lattice_key(v, WELD_QUANTUM)).or_insert_with(|| {
                let id = (positions.len() / 3) as u32;
                positions.extend([v.x as f32, v.y as f32, v.z as f32]);
                id
            })
        })
        .collect();

    let indices: Vec<u32> = mesh
        .indices
        .iter()
        .map(|tri| tri.map(|i| welded[i as usize]))
        .filter(|[a, b, c]| a != b && b != c && a != c)
        .flatten()
        .collect();

    Manifold::from_mesh(Mesh::new(&positions, &indices))
}

/// Reads positions, crease-split normals and triangles back out of a solid.
fn from_manifold(manifold: &Manifold) -> TriangleMesh {
    // Normals go in property slot 0; edges sharper than 30 degrees split.
    let out = manifold.calculate_normals(0, 30.0).to_mesh();
    let stride = out.num_props() as usize;
    let mut mesh = TriangleMesh::default();
    if stride < 3 {
        return mesh;
    }

    let props = out.vertices();
    for chunk in props.chunks_exact(stride) {
        let position = Point3::new(
            f64::from(chunk[0]),
            f64::from(chunk[1]),
            f64::from(chunk[2]),
        );
        let normal = if stride >= 6 {
            Vector3::new(f64::from(chunk[3]), f64::from(chunk[4]), f64::from(chunk[5]))
        } else {
            Vector3::zeros()
        };
        mesh.push_vertex(position, normal);
    }

    let indices = out.indices();
    mesh.indices = indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();
    if stride < 6 {
        mesh.recompute_normals();
    }
    mesh
}
