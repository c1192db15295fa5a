mod hole;
mod shape;

pub use hole::{HoleSpec, HoleSurface};
pub use shape::{BaseShapeSpec, CurvatureKind, GeometryType, ShapeParams, TopCurvature};
