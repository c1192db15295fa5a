mod engine;
mod manifold_engine;
mod subtract;

pub use engine::SubtractionEngine;
pub use manifold_engine::ManifoldEngine;
pub use subtract::Subtract;
