use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// Discriminant of a [`BaseShapeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Box,
    Cylinder,
    Tube,
    Curved,
}

impl GeometryType {
    /// The session-side name of this geometry type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Tube => "tube",
            Self::Curved => "curved",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(Self::Box),
            "cylinder" => Ok(Self::Cylinder),
            "tube" => Ok(Self::Tube),
            "curved" => Ok(Self::Curved),
            other => Err(ShapeError::UnknownGeometryType(other.to_owned())),
        }
    }
}

/// Direction of the curvature of a curved-top box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurvatureKind {
    #[default]
    Flat,
    Convex,
    Concave,
}

/// Top-surface curvature of a curved-top box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TopCurvature {
    pub kind: CurvatureKind,
    pub radius: f64,
}

impl TopCurvature {
    /// Creates a new curvature description.
    #[must_use]
    pub fn new(kind: CurvatureKind, radius: f64) -> Self {
        Self { kind, radius }
    }

    /// Peak rise of the top surface above the flat top, for a block of the
    /// given height. Negative for concave tops, zero for flat ones.
    ///
    /// The magnitude is capped by both the block height and the radius.
    #[must_use]
    pub fn curve_height(&self, height: f64) -> f64 {
        match self.kind {
            CurvatureKind::Flat => 0.0,
            CurvatureKind::Convex => (height * 0.25).min(self.radius * 0.15),
            CurvatureKind::Concave => -(height * 0.15).min(self.radius * 0.10),
        }
    }
}

/// Declarative description of a block's outer shape.
///
/// Box-like shapes have length along X, height along Y, and width along Z.
/// Cylindrical shapes lie along X. All shapes are centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseShapeSpec {
    Box {
        length: f64,
        width: f64,
        height: f64,
    },
    Cylinder {
        outer_diameter: f64,
        cylinder_length: f64,
    },
    Tube {
        outer_diameter: f64,
        inner_diameter: f64,
        cylinder_length: f64,
    },
    Curved {
        length: f64,
        width: f64,
        height: f64,
        top_curvature: TopCurvature,
    },
}

impl BaseShapeSpec {
    /// The discriminant of this shape.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Box { .. } => GeometryType::Box,
            Self::Cylinder { .. } => GeometryType::Cylinder,
            Self::Tube { .. } => GeometryType::Tube,
            Self::Curved { .. } => GeometryType::Curved,
        }
    }
}

/// Flat, session-side form of a base shape.
///
/// Carries every dimension regardless of the geometry type; only the fields
/// relevant to `geometry_type` are read by [`ShapeParams::to_spec`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeParams {
    pub geometry_type: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub cylinder_length: f64,
    pub top_curvature: TopCurvature,
}

impl ShapeParams {
    /// Converts into the typed shape description.
    ///
    /// Dimensions are passed through unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownGeometryType`] if `geometry_type` is not
    /// one of `box`, `cylinder`, `tube`, or `curved`.
    pub fn to_spec(&self) -> Result<BaseShapeSpec, ShapeError> {
        let spec = match self.geometry_type.parse::<GeometryType>()? {
            GeometryType::Box => BaseShapeSpec::Box {
                length: self.length,
                width: self.width,
                height: self.height,
            },
            GeometryType::Cylinder => BaseShapeSpec::Cylinder {
                outer_diameter: self.outer_diameter,
                cylinder_length: self.cylinder_length,
            },
            GeometryType::Tube => BaseShapeSpec::Tube {
                outer_diameter: self.outer_diameter,
                inner_diameter: self.inner_diameter,
                cylinder_length: self.cylinder_length,
            },
            GeometryType::Curved => BaseShapeSpec::Curved {
                length: self.length,
                width: self.width,
                height: self.height,
                top_curvature: self.top_curvature,
            },
        };
        Ok(spec)
    }
}
