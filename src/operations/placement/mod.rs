mod frame;
mod resolve_placement;

pub use frame::PlacementFrame;
pub use resolve_placement::ResolvePlacement;
