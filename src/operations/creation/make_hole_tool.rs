use crate::error::Result;
use crate::model::HoleSpec;
use crate::tessellation::TriangleMesh;

use super::MakeCylinder;

/// Builds the cutting tool for one hole.
///
/// The tool is a cylinder of the hole's diameter lying along Y, centered on
/// the origin and longer than the hole's depth by `margin` (split evenly past
/// both ends) so that it cleanly pierces the surface it enters through. The
/// placement resolver moves it into position.
pub struct MakeHoleTool<'a> {
    hole: &'a HoleSpec,
    margin: f64,
    segments: usize,
}

impl<'a> MakeHoleTool<'a> {
    /// Creates a tool with a 2-unit margin and 32 segments.
    #[must_use]
    pub fn new(hole: &'a HoleSpec) -> Self {
        Self {
            hole,
            margin: 2.0,
            segments: 32,
        }
    }

    /// Sets the extra length added to the hole depth.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the circumferential segment count.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Length of the generated tool.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.hole.depth + self.margin
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 segments are requested.
    pub fn execute(&self) -> Result<TriangleMesh> {
        MakeCylinder::new(self.hole.radius(), self.length(), self.segments).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point2, Point3};
    use crate::operations::query::{BoundingBox, IsWatertight};

    fn hole() -> HoleSpec {
        HoleSpec::new("h1", 6.0, 20.0, Point2::new(25.0, 30.0))
    }

    #[test]
    fn tool_is_two_units_longer_than_the_hole() {
        let hole = hole();
        let tool = MakeHoleTool::new(&hole).execute().unwrap();
        let aabb = BoundingBox::new(&tool).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-3.0, -11.0, -3.0), epsilon = 1e-9);
        assert_relative_eq!(aabb.max, Point3::new(3.0, 11.0, 3.0), epsilon = 1e-9);
    }

    #[test]
    fn tool_uses_32_segments() {
        let hole = hole();
        let tool = MakeHoleTool::new(&hole).execute().unwrap();
        // Wall of 2 triangles per segment plus one per segment on each cap.
        assert_eq!(tool.triangle_count(), 4 * 32);
        assert!(IsWatertight::new(&tool).execute());
    }

    #[test]
    fn margin_and_segments_are_configurable() {
        let hole = hole();
        let op = MakeHoleTool::new(&hole).with_margin(0.5).with_segments(8);
        assert_relative_eq!(op.length(), 20.5);
        assert_eq!(op.execute().unwrap().triangle_count(), 32);
    }
}
