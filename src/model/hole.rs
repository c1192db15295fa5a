use crate::math::Point2;

/// The face of a box-like block a hole is drilled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoleSurface {
    #[default]
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

/// A cylindrical hole to cut into the block.
///
/// For box-like shapes `position` is measured from a corner of the target
/// face (see the placement resolver for each face's axes). For cylindrical
/// shapes only `position.x` is read: the axial offset from the left end, and
/// `surface` is ignored because those holes are always radial from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleSpec {
    pub id: String,
    pub diameter: f64,
    pub depth: f64,
    pub position: Point2,
    pub surface: HoleSurface,
}

impl HoleSpec {
    /// Creates a hole on the top surface.
    #[must_use]
    pub fn new(id: impl Into<String>, diameter: f64, depth: f64, position: Point2) -> Self {
        Self {
            id: id.into(),
            diameter,
            depth,
            position,
            surface: HoleSurface::Top,
        }
    }

    /// Sets the target surface.
    #[must_use]
    pub fn on(mut self, surface: HoleSurface) -> Self {
        self.surface = surface;
        self
    }

    /// Radius of the hole.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }
}
