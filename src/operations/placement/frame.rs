use crate::math::{Isometry3, Point3, UnitQuaternion, Vector3};

/// Where a hole tool goes: the tool center and the rotation applied to its
/// native Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementFrame {
    pub position: Point3,
    pub orientation: UnitQuaternion,
}

impl PlacementFrame {
    /// Creates a frame from a position and orientation.
    #[must_use]
    pub fn new(position: Point3, orientation: UnitQuaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The rigid transform taking tool space into block space.
    #[must_use]
    pub fn isometry(&self) -> Isometry3 {
        Isometry3::from_parts(self.position.coords.into(), self.orientation)
    }

    /// Direction of the tool axis in block space.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        self.orientation * Vector3::y()
    }
}

impl Default for PlacementFrame {
    fn default() -> Self {
        Self::new(Point3::origin(), UnitQuaternion::identity())
    }
}
