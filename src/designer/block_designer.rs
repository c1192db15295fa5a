use crate::error::Result;
use crate::model::{BaseShapeSpec, HoleSpec, ShapeParams};
use crate::operations::boolean::{ManifoldEngine, Subtract, SubtractionEngine};
use crate::operations::creation::{MakeBaseShape, MakeHoleTool};
use crate::operations::placement::ResolvePlacement;
use crate::tessellation::TriangleMesh;

use super::{BuildReport, DesignerParams, HoleFailure};

/// Builds a block mesh by cutting an ordered list of holes out of a base
/// shape.
///
/// Holes are subtracted one after another from the running mesh. A hole
/// whose subtraction fails is skipped with a warning and the rest are still
/// applied; only a malformed shape description aborts the build.
#[derive(Debug, Clone)]
pub struct BlockDesigner<E> {
    engine: E,
    params: DesignerParams,
}

impl Default for BlockDesigner<ManifoldEngine> {
    fn default() -> Self {
        Self::new(ManifoldEngine::new())
    }
}

impl<E: SubtractionEngine> BlockDesigner<E> {
    /// Creates a designer cutting with `engine` and default parameters.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            params: DesignerParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: DesignerParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn params(&self) -> &DesignerParams {
        &self.params
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Builds the block mesh.
    ///
    /// # Errors
    ///
    /// Returns an error only if the base shape cannot be generated with the
    /// configured tessellation. Failed holes are not errors.
    pub fn build(&self, shape: &BaseShapeSpec, holes: &[HoleSpec]) -> Result<TriangleMesh> {
        self.build_with_report(shape, holes).map(|(mesh, _)| mesh)
    }

    /// Builds the block from the flat shape form.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownGeometryType`](crate::error::ShapeError)
    /// for an unrecognized geometry type, otherwise as [`Self::build`].
    pub fn build_from_params(&self, shape: &ShapeParams, holes: &[HoleSpec]) -> Result<TriangleMesh> {
        let spec = shape.to_spec()?;
        self.build(&spec, holes)
    }

    /// Builds the block mesh and reports what happened to each hole.
    ///
    /// With no holes the base shape is returned as generated. Otherwise at
    /// most `max_holes_for_csg` holes are cut, in list order, and vertex
    /// normals are recomputed over the final mesh.
    ///
    /// # Errors
    ///
    /// As [`Self::build`].
    pub fn build_with_report(
        &self,
        shape: &BaseShapeSpec,
        holes: &[HoleSpec],
    ) -> Result<(TriangleMesh, BuildReport)> {
        let base = MakeBaseShape::new(shape)
            .with_params(self.params.tessellation)
            .execute()?;
        let mut report = BuildReport::default();

        if holes.is_empty() {
            tracing::debug!(shape = %shape.geometry_type(), "no holes, returning base shape");
            return Ok((base, report));
        }

        let (kept, dropped) = holes.split_at(holes.len().min(self.params.max_holes_for_csg));
        if !dropped.is_empty() {
            tracing::debug!(
                requested = holes.len(),
                cap = self.params.max_holes_for_csg,
                "hole count over cap, ignoring the rest"
            );
            report.dropped = dropped.iter().map(|h| h.id.clone()).collect();
        }

        let mut mesh = kept.iter().fold(base, |mesh, hole| match self.cut(shape, &mesh, hole) {
            Ok(cut) => {
                report.applied.push(hole.id.clone());
                cut
            }
            Err(err) => {
                tracing::warn!(hole = %hole.id, error = %err, "hole subtraction failed, skipping");
                report.failed.push(HoleFailure {
                    id: hole.id.clone(),
                    message: err.to_string(),
                });
                mesh
            }
        });
        mesh.recompute_normals();

        tracing::debug!(
            shape = %shape.geometry_type(),
            applied = report.applied.len(),
            failed = report.failed.len(),
            dropped = report.dropped.len(),
            triangles = mesh.triangle_count(),
            "block built"
        );
        Ok((mesh, report))
    }

    fn cut(&self, shape: &BaseShapeSpec, mesh: &TriangleMesh, hole: &HoleSpec) -> Result<TriangleMesh> {
        let placement = ResolvePlacement::new(shape, hole).execute();
        let tool = MakeHoleTool::new(hole)
            .with_margin(self.params.tool_margin)
            .with_segments(self.params.tessellation.hole_segments)
            .execute()?;
        Subtract::new(&self.engine, mesh, &tool, &placement).execute()
    }
}
