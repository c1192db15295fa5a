mod bounding_box;
mod is_valid;
mod is_watertight;
mod ray_cast;
mod volume;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::IsValid;
pub use is_watertight::IsWatertight;
pub use ray_cast::RayCast;
pub use volume::Volume;
