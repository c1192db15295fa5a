/// A hole whose subtraction was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleFailure {
    pub id: String,
    pub message: String,
}

/// What happened to each hole during one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Holes cut into the block, in application order.
    pub applied: Vec<String>,
    /// Holes whose subtraction failed and left the block unchanged.
    pub failed: Vec<HoleFailure>,
    /// Holes beyond the processing cap.
    pub dropped: Vec<String>,
}

impl BuildReport {
    /// Returns `true` if every requested hole was applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.dropped.is_empty()
    }
}
