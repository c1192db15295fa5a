pub mod boolean;
pub mod creation;
pub mod placement;
pub mod query;
pub mod shaping;
