use std::f64::consts::FRAC_PI_2;

use crate::math::{Point3, UnitQuaternion, Vector3};
use crate::model::{BaseShapeSpec, HoleSpec, HoleSurface, TopCurvature};
use crate::operations::creation::CurvedProfile;

use super::PlacementFrame;

/// Computes where a hole tool must sit to drill a hole into a base shape.
///
/// Hole positions are 2D offsets from a corner of the target face. Each
/// face maps its `(x, y)` onto two block axes and centers the tool
/// `depth / 2` inside the face along the third:
///
/// | surface        | block X          | block Y                  | block Z          | tool axis |
/// |----------------|------------------|--------------------------|------------------|-----------|
/// | top / bottom   | `x - L/2`        | `±(H/2 - depth/2)`       | `y - W/2`        | Y         |
/// | front / back   | `x - L/2`        | `y - H/2`                | `±(W/2 - depth/2)` | Z       |
/// | left / right   | `∓(L/2 - depth/2)` | `y - H/2`              | `x - W/2`        | X         |
///
/// On a curved top the tool follows the profile height at its X position.
/// Cylindrical shapes ignore the surface and drill radially from above at
/// axial offset `x` from the left end.
///
/// Positions are not bounds-checked; a hole off the face simply misses.
pub struct ResolvePlacement<'a> {
    shape: &'a BaseShapeSpec,
    hole: &'a HoleSpec,
}

impl<'a> ResolvePlacement<'a> {
    /// Creates a new `ResolvePlacement` operation.
    #[must_use]
    pub fn new(shape: &'a BaseShapeSpec, hole: &'a HoleSpec) -> Self {
        Self { shape, hole }
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> PlacementFrame {
        match *self.shape {
            BaseShapeSpec::Box {
                length,
                width,
                height,
            } => self.on_block(length, width, height, None),
            BaseShapeSpec::Curved {
                length,
                width,
                height,
                top_curvature,
            } => self.on_block(length, width, height, Some(&top_curvature)),
            BaseShapeSpec::Cylinder {
                outer_diameter,
                cylinder_length,
            }
            | BaseShapeSpec::Tube {
                outer_diameter,
                cylinder_length,
                ..
            } => self.on_cylinder(outer_diameter * 0.5, cylinder_length),
        }
    }

    fn on_block(
        &self,
        length: f64,
        width: f64,
        height: f64,
        curvature: Option<&TopCurvature>,
    ) -> PlacementFrame {
        let (hl, hw, hh) = (length * 0.5, width * 0.5, height * 0.5);
        let inset = self.hole.depth * 0.5;
        let (u, v) = (self.hole.position.x, self.hole.position.y);

        let (position, orientation) = match self.hole.surface {
            HoleSurface::Top => {
                let x = u - hl;
                let top = curvature.map_or(hh, |c| CurvedProfile::new(length, height, c).top_height(x));
                (Point3::new(x, top - inset, v - hw), UnitQuaternion::identity())
            }
            HoleSurface::Bottom => (
                Point3::new(u - hl, -(hh - inset), v - hw),
                UnitQuaternion::identity(),
            ),
            HoleSurface::Front => (
                Point3::new(u - hl, v - hh, hw - inset),
                UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
            ),
            HoleSurface::Back => (
                Point3::new(u - hl, v - hh, -(hw - inset)),
                UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
            ),
            HoleSurface::Left => (
                Point3::new(-(hl - inset), v - hh, u - hw),
                UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            ),
            HoleSurface::Right => (
                Point3::new(hl - inset, v - hh, u - hw),
                UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            ),
        };
        PlacementFrame::new(position, orientation)
    }

    fn on_cylinder(&self, outer_radius: f64, length: f64) -> PlacementFrame {
        let x = self.hole.position.x - length * 0.5;
        let y = outer_radius - self.hole.depth * 0.5;
        PlacementFrame::new(Point3::new(x, y, 0.0), UnitQuaternion::identity())
    }
}
