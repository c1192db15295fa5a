use crate::error::Result;
use crate::model::{BaseShapeSpec, HoleSpec};
use crate::operations::boolean::SubtractionEngine;
use crate::tessellation::TriangleMesh;

use super::{BlockDesigner, BuildReport};

struct Entry {
    shape: BaseShapeSpec,
    holes: Vec<HoleSpec>,
    mesh: TriangleMesh,
    report: BuildReport,
}

impl Entry {
    fn matches(&self, shape: &BaseShapeSpec, holes: &[HoleSpec]) -> bool {
        self.shape == *shape && self.holes == holes
    }
}

/// Remembers the last build and skips rebuilding for equal inputs.
///
/// Inputs are compared by value, so any edit to the shape or to any hole
/// triggers a full rebuild.
pub struct RecomputeCache<E> {
    designer: BlockDesigner<E>,
    last: Option<Entry>,
}

impl<E: SubtractionEngine> RecomputeCache<E> {
    #[must_use]
    pub fn new(designer: BlockDesigner<E>) -> Self {
        Self {
            designer,
            last: None,
        }
    }

    /// Returns the mesh for these inputs, building it only if they differ
    /// from the previous call.
    ///
    /// # Errors
    ///
    /// As [`BlockDesigner::build`]. A failed build also clears the cache.
    pub fn get(&mut self, shape: &BaseShapeSpec, holes: &[HoleSpec]) -> Result<&TriangleMesh> {
        let entry = match self.last.take() {
            Some(entry) if entry.matches(shape, holes) => {
                tracing::trace!("inputs unchanged, reusing mesh");
                entry
            }
            _ => {
                let (mesh, report) = self.designer.build_with_report(shape, holes)?;
                Entry {
                    shape: *shape,
                    holes: holes.to_vec(),
                    mesh,
                    report,
                }
            }
        };
        Ok(&self.last.insert(entry).mesh)
    }

    /// Report of the cached build, if any.
    #[must_use]
    pub fn report(&self) -> Option<&BuildReport> {
        self.last.as_ref().map(|entry| &entry.report)
    }

    /// Forgets the cached build.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn designer(&self) -> &BlockDesigner<E> {
        &self.designer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::math::Point2;
    use crate::operations::placement::PlacementFrame;

    /// Passes the target through and counts calls.
    #[derive(Default)]
    struct Counter(Cell<usize>);

    impl SubtractionEngine for Counter {
        fn subtract(&self, target: &TriangleMesh, _: &TriangleMesh, _: &PlacementFrame) -> Result<TriangleMesh> {
            self.0.set(self.0.get() + 1);
            Ok(target.clone())
        }
    }

    const BLOCK: BaseShapeSpec = BaseShapeSpec::Box {
        length: 100.0,
        width: 60.0,
        height: 20.0,
    };

    fn calls(cache: &RecomputeCache<Counter>) -> usize {
        cache.designer().engine().0.get()
    }

    #[test]
    fn equal_inputs_reuse_the_mesh() {
        let holes = vec![HoleSpec::new("h", 6.0, 20.0, Point2::new(25.0, 30.0))];
        let mut cache = RecomputeCache::new(BlockDesigner::new(Counter::default()));

        let first = cache.get(&BLOCK, &holes).unwrap().clone();
        let second = cache.get(&BLOCK, &holes.clone()).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(calls(&cache), 1);
        assert_eq!(cache.report().unwrap().applied, vec!["h".to_string()]);
    }

    #[test]
    fn any_edit_rebuilds() {
        let mut holes = vec![HoleSpec::new("h", 6.0, 20.0, Point2::new(25.0, 30.0))];
        let mut cache = RecomputeCache::new(BlockDesigner::new(Counter::default()));
        cache.get(&BLOCK, &holes).unwrap();

        holes[0].diameter = 7.0;
        cache.get(&BLOCK, &holes).unwrap();
        assert_eq!(calls(&cache), 2);

        let longer = BaseShapeSpec::Box {
            length: 101.0,
            width: 60.0,
            height: 20.0,
        };
        cache.get(&longer, &holes).unwrap();
        assert_eq!(calls(&cache), 3);
    }

    #[test]
    fn invalidate_forces_a_rebuild() {
        let holes = vec![HoleSpec::new("h", 6.0, 20.0, Point2::new(25.0, 30.0))];
        let mut cache = RecomputeCache::new(BlockDesigner::new(Counter::default()));
        cache.get(&BLOCK, &holes).unwrap();
        cache.invalidate();
        assert!(cache.report().is_none());
        cache.get(&BLOCK, &holes).unwrap();
        assert_eq!(calls(&cache), 2);
    }
}
