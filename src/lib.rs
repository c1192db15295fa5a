pub mod designer;
pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod tessellation;

pub use designer::{BlockDesigner, BuildReport, DesignerParams, RecomputeCache};
pub use error::{BlockcutError, Result};
pub use model::{BaseShapeSpec, HoleSpec, HoleSurface, ShapeParams};
pub use tessellation::TriangleMesh;
