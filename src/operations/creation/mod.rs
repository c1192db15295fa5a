mod make_base_shape;
mod make_box;
mod make_curved_box;
mod make_cylinder;
mod make_hole_tool;
mod make_tube;

pub use make_base_shape::MakeBaseShape;
pub use make_box::MakeBox;
pub use make_curved_box::{CurvedProfile, MakeCurvedBox};
pub use make_cylinder::MakeCylinder;
pub use make_hole_tool::MakeHoleTool;
pub use make_tube::MakeTube;
