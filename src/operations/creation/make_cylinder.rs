use crate::error::Result;
use crate::math::Point2;
use crate::operations::shaping::Revolve;
use crate::tessellation::TriangleMesh;

/// Creates a capped cylinder centered on the origin with its axis along Y.
///
/// Internally revolves the rectangular profile
/// `(0, -h/2) -> (r, -h/2) -> (r, h/2) -> (0, h/2)` around the axis; the two
/// profile edges touching the axis become the end caps.
pub struct MakeCylinder {
    radius: f64,
    length: f64,
    segments: usize,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(radius: f64, length: f64, segments: usize) -> Self {
        Self {
            radius,
            length,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 segments are requested.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let h = self.length * 0.5;
        let r = self.radius;
        let profile = vec![
            Point2::new(0.0, -h),
            Point2::new(r, -h),
            Point2::new(r, h),
            Point2::new(0.0, h),
        ];
        Revolve::new(profile, self.segments).execute()
    }
}
