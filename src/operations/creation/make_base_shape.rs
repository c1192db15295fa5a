use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::math::{Isometry3, UnitQuaternion, Vector3};
use crate::model::BaseShapeSpec;
use crate::tessellation::{TessellationParams, TriangleMesh};

use super::{MakeBox, MakeCurvedBox, MakeCylinder, MakeTube};

/// Generates the outer solid described by a [`BaseShapeSpec`].
///
/// Cylinders and tubes are revolved around Y and then laid along X.
/// Dimensions are not validated; zero or negative values yield degenerate
/// geometry rather than an error.
pub struct MakeBaseShape<'a> {
    spec: &'a BaseShapeSpec,
    params: TessellationParams,
}

impl<'a> MakeBaseShape<'a> {
    /// Creates a new `MakeBaseShape` operation with default tessellation.
    #[must_use]
    pub fn new(spec: &'a BaseShapeSpec) -> Self {
        Self {
            spec,
            params: TessellationParams::default(),
        }
    }

    /// Overrides the tessellation density.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters request fewer than 3
    /// circumferential segments for a cylindrical shape.
    pub fn execute(&self) -> Result<TriangleMesh> {
        match *self.spec {
            BaseShapeSpec::Box {
                length,
                width,
                height,
            } => Ok(MakeBox::new(length, width, height).execute()),
            BaseShapeSpec::Cylinder {
                outer_diameter,
                cylinder_length,
            } => MakeCylinder::new(
                outer_diameter * 0.5,
                cylinder_length,
                self.params.cylinder_segments,
            )
            .execute()
            .map(lay_along_x),
            BaseShapeSpec::Tube {
                outer_diameter,
                inner_diameter,
                cylinder_length,
            } => MakeTube::new(
                outer_diameter * 0.5,
                inner_diameter * 0.5,
                cylinder_length,
                self.params.cylinder_segments,
            )
            .execute()
            .map(lay_along_x),
            BaseShapeSpec::Curved {
                length,
                width,
                height,
                top_curvature,
            } => MakeCurvedBox::new(length, width, height, top_curvature)
                .with_segments(
                    self.params.curved_length_segments,
                    self.params.curved_width_segments,
                )
                .execute(),
        }
    }
}

/// Turns a Y-axis solid of revolution so its axis runs along X.
///
/// The rotation maps `(x, y, z)` to `(y, -x, z)`.
fn lay_along_x(mut mesh: TriangleMesh) -> TriangleMesh {
    let turn = Isometry3::from_parts(
        nalgebra::Translation3::identity(),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -FRAC_PI_2),
    );
    mesh.transform(&turn);
    mesh
}
