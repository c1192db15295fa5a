use crate::error::Result;
use crate::operations::placement::PlacementFrame;
use crate::tessellation::TriangleMesh;

/// A mesh boolean backend able to cut one solid out of another.
///
/// The block designer is generic over this trait so that the kernel doing
/// the actual cutting can be swapped, or faked in tests.
pub trait SubtractionEngine {
    /// Returns `target` minus `tool`, with `tool` first moved by `placement`.
    ///
    /// # Errors
    ///
    /// Returns an error if the subtraction cannot be computed.
    fn subtract(
        &self,
        target: &TriangleMesh,
        tool: &TriangleMesh,
        placement: &PlacementFrame,
    ) -> Result<TriangleMesh>;
}

impl<E: SubtractionEngine + ?Sized> SubtractionEngine for &E {
    fn subtract(
        &self,
        target: &TriangleMesh,
        tool: &TriangleMesh,
        placement: &PlacementFrame,
    ) -> Result<TriangleMesh> {
        (**self).subtract(target, tool, placement)
    }
}

impl<E: SubtractionEngine + ?Sized> SubtractionEngine for Box<E> {
    fn subtract(
        &self,
        target: &TriangleMesh,
        tool: &TriangleMesh,
        placement: &PlacementFrame,
    ) -> Result<TriangleMesh> {
        (**self).subtract(target, tool, placement)
    }
}
