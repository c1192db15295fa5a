use crate::tessellation::TessellationParams;

/// Settings for [`BlockDesigner`](super::BlockDesigner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignerParams {
    /// Tessellation density of base shapes and hole tools.
    pub tessellation: TessellationParams,
    /// Length added to every hole tool beyond the hole depth.
    pub tool_margin: f64,
    /// Holes past this many in the list are ignored.
    pub max_holes_for_csg: usize,
}

impl Default for DesignerParams {
    fn default() -> Self {
        Self {
            tessellation: TessellationParams::default(),
            tool_margin: 2.0,
            max_holes_for_csg: 10,
        }
    }
}

impl DesignerParams {
    #[must_use]
    pub fn with_tessellation(mut self, tessellation: TessellationParams) -> Self {
        self.tessellation = tessellation;
        self
    }

    #[must_use]
    pub fn with_tool_margin(mut self, tool_margin: f64) -> Self {
        self.tool_margin = tool_margin;
        self
    }

    #[must_use]
    pub fn with_max_holes(mut self, max_holes_for_csg: usize) -> Self {
        self.max_holes_for_csg = max_holes_for_csg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = DesignerParams::default();
        assert_eq!(params.max_holes_for_csg, 10);
        assert!((params.tool_margin - 2.0).abs() < f64::EPSILON);
        assert_eq!(params.tessellation.hole_segments, 32);
        assert_eq!(params.tessellation.cylinder_segments, 64);
    }

    #[test]
    fn builders_override_single_fields() {
        let params = DesignerParams::default().with_max_holes(3).with_tool_margin(0.5);
        assert_eq!(params.max_holes_for_csg, 3);
        assert!((params.tool_margin - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.tessellation, TessellationParams::default());

        let coarse = TessellationParams {
            cylinder_segments: 12,
            ..TessellationParams::default()
        };
        let params = params.with_tessellation(coarse);
        assert_eq!(params.tessellation.cylinder_segments, 12);
        assert_eq!(params.max_holes_for_csg, 3);
    }
}
