use std::collections::HashMap;

use crate::math::lattice_key;
use crate::tessellation::TriangleMesh;

/// Spacing used to weld coincident vertices before edge counting.
const WELD_QUANTUM: f64 = 1e-9;

/// Checks that a mesh is closed and consistently oriented.
///
/// Vertices are welded by position first, so patches that duplicate
/// boundary vertices (for crisp normals) still count as connected. The mesh
/// is watertight when every directed edge `a -> b` occurs exactly once and
/// its reverse `b -> a` occurs exactly once.
pub struct IsWatertight<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> IsWatertight<'a> {
    /// Creates a new `IsWatertight` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.mesh.is_empty() {
            return false;
        }

        let mut ids: HashMap<[i64; 3], usize> = HashMap::new();
        let welded: Vec<usize> = self
            .mesh
            .vertices
            .iter()
            .map(|v| {
                let next = ids.len();
                *ids.entry(lattice_key(v, WELD_QUANTUM)).or_insert(next)
            })
            .collect();

        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        for tri in &self.mesh.indices {
            let w = tri.map(|i| welded[i as usize]);
            if w[0] == w[1] || w[1] == w[2] || w[2] == w[0] {
                return false;
            }
            for k in 0..3 {
                *directed.entry((w[k], w[(k + 1) % 3])).or_default() += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }
}
