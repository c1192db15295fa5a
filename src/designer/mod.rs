//! Building a finished block from a base shape and a list of holes.

mod block_designer;
mod cache;
mod params;
mod report;

pub use block_designer::BlockDesigner;
pub use cache::RecomputeCache;
pub use params::DesignerParams;
pub use report::{BuildReport, HoleFailure};
