use crate::error::{BooleanError, Result};
use crate::operations::placement::PlacementFrame;
use crate::operations::query::{IsValid, IsWatertight, Volume};
use crate::tessellation::TriangleMesh;

use super::SubtractionEngine;

/// Relative growth in volume tolerated before a result is rejected.
const VOLUME_SLACK: f64 = 1e-5;

/// Cuts a placed tool out of a target mesh and checks the result.
///
/// The engine's output is rejected if it is structurally invalid, not a
/// closed consistently oriented surface, or encloses more volume than the
/// target did.
pub struct Subtract<'a, E: SubtractionEngine + ?Sized> {
    engine: &'a E,
    target: &'a TriangleMesh,
    tool: &'a TriangleMesh,
    placement: &'a PlacementFrame,
}

impl<'a, E: SubtractionEngine + ?Sized> Subtract<'a, E> {
    /// Creates a new `Subtract` operation (target - tool).
    #[must_use]
    pub fn new(
        engine: &'a E,
        target: &'a TriangleMesh,
        tool: &'a TriangleMesh,
        placement: &'a PlacementFrame,
    ) -> Self {
        Self {
            engine,
            target,
            tool,
            placement,
        }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails or its result is empty,
    /// malformed, not watertight, or larger than the target.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let result = self.engine.subtract(self.target, self.tool, self.placement)?;
        if result.is_empty() {
            return Err(BooleanError::EmptyResult.into());
        }
        if let Some(problem) = IsValid::new(&result).problem() {
            return Err(BooleanError::InvalidResult(problem.into()).into());
        }
        if !IsWatertight::new(&result).execute() {
            return Err(BooleanError::InvalidResult("result is not watertight".into()).into());
        }

        let before = Volume::new(self.target).execute();
        let after = Volume::new(&result).execute();
        if after > before + VOLUME_SLACK * before.abs().max(1.0) {
            return Err(BooleanError::InvalidResult(format!(
                "volume grew from {before} to {after}"
            ))
            .into());
        }
        Ok(result)
    }
}
