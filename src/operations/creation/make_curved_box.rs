use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::model::{CurvatureKind, TopCurvature};
use crate::tessellation::TriangleMesh;

use super::MakeBox;

/// Longitudinal profile of a curved top surface.
///
/// `y(x) = half_height + curve_height * (1 - (x / half_length)^2)`, so the
/// top meets the flat-box height at both ends and deviates most at `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedProfile {
    half_length: f64,
    half_height: f64,
    curve_height: f64,
}

impl CurvedProfile {
    /// Creates the profile for a block of the given length and height.
    #[must_use]
    pub fn new(length: f64, height: f64, curvature: &TopCurvature) -> Self {
        Self {
            half_length: length * 0.5,
            half_height: height * 0.5,
            curve_height: curvature.curve_height(height),
        }
    }

    /// Height of the top surface at longitudinal position `x`.
    #[must_use]
    pub fn top_height(&self, x: f64) -> f64 {
        let t = self.normalized(x);
        self.half_height + self.curve_height * (1.0 - t * t)
    }

    /// Slope `dy/dx` of the top surface at `x`.
    #[must_use]
    pub fn top_slope(&self, x: f64) -> f64 {
        if self.half_length > 0.0 {
            -2.0 * self.curve_height * x / (self.half_length * self.half_length)
        } else {
            0.0
        }
    }

    /// Outward unit normal of the top surface at `x`.
    #[must_use]
    pub fn top_normal(&self, x: f64) -> Vector3 {
        Vector3::new(-self.top_slope(x), 1.0, 0.0).normalize()
    }

    fn normalized(&self, x: f64) -> f64 {
        if self.half_length > 0.0 {
            x / self.half_length
        } else {
            0.0
        }
    }
}

/// Creates a box whose top surface curves along its length.
///
/// The mesh is assembled from six patches that share their boundary samples:
/// curved top, flat bottom, two curved-profile faces at `z = ±width/2`, and
/// two flat end faces at `x = ±length/2`. A flat curvature produces exactly
/// the plain [`MakeBox`] mesh.
pub struct MakeCurvedBox {
    length: f64,
    width: f64,
    height: f64,
    curvature: TopCurvature,
    length_segments: usize,
    width_segments: usize,
}

impl MakeCurvedBox {
    /// Creates a new `MakeCurvedBox` operation with 32×16 top tessellation.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64, curvature: TopCurvature) -> Self {
        Self {
            length,
            width,
            height,
            curvature,
            length_segments: 32,
            width_segments: 16,
        }
    }

    /// Sets the number of quads along the length and across the width.
    #[must_use]
    pub fn with_segments(mut self, length_segments: usize, width_segments: usize) -> Self {
        self.length_segments = length_segments.max(1);
        self.width_segments = width_segments.max(1);
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Currently infallible for finite input; the `Result` mirrors the other
    /// generators that can reject their tessellation parameters.
    #[allow(clippy::unnecessary_wraps)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.curvature.kind == CurvatureKind::Flat {
            return Ok(MakeBox::new(self.length, self.width, self.height).execute());
        }

        let profile = CurvedProfile::new(self.length, self.height, &self.curvature);
        let grid = Grid::new(self, &profile);

        let mut mesh = top_patch(&grid, &profile);
        mesh.merge(&bottom_patch(&grid));
        mesh.merge(&profile_face(&grid, 1.0));
        mesh.merge(&profile_face(&grid, -1.0));
        mesh.merge(&end_face(&grid, 1.0));
        mesh.merge(&end_face(&grid, -1.0));
        Ok(mesh)
    }
}

/// Boundary samples shared by every patch so that seams match bit for bit.
struct Grid {
    xs: Vec<f64>,
    zs: Vec<f64>,
    top_ys: Vec<f64>,
    bottom_y: f64,
    half_length: f64,
    half_width: f64,
}

impl Grid {
    #[allow(clippy::cast_precision_loss)]
    fn new(shape: &MakeCurvedBox, profile: &CurvedProfile) -> Self {
        let half_length = shape.length * 0.5;
        let half_width = shape.width * 0.5;
        let lerp = |half: f64, i: usize, n: usize| half * (2.0 * i as f64 / n as f64 - 1.0);

        let xs: Vec<f64> = (0..=shape.length_segments)
            .map(|i| lerp(half_length, i, shape.length_segments))
            .collect();
        let zs: Vec<f64> = (0..=shape.width_segments)
            .map(|k| lerp(half_width, k, shape.width_segments))
            .collect();
        let top_ys = xs.iter().map(|&x| profile.top_height(x)).collect();

        Self {
            xs,
            zs,
            top_ys,
            bottom_y: -shape.height * 0.5,
            half_length,
            half_width,
        }
    }
}

fn top_patch(grid: &Grid, profile: &CurvedProfile) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    for (&x, &y) in grid.xs.iter().zip(&grid.top_ys) {
        let normal = profile.top_normal(x);
        for &z in &grid.zs {
            mesh.push_vertex(Point3::new(x, y, z), normal);
        }
    }
    push_grid_quads(&mut mesh, grid.xs.len(), grid.zs.len(), &Vector3::y());
    mesh
}

fn bottom_patch(grid: &Grid) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    let normal = -Vector3::y();
    for &x in &grid.xs {
        for &z in &grid.zs {
            mesh.push_vertex(Point3::new(x, grid.bottom_y, z), normal);
        }
    }
    push_grid_quads(&mut mesh, grid.xs.len(), grid.zs.len(), &normal);
    mesh
}

/// The face at `z = side * half_width`, bounded below by the flat bottom and
/// above by the curved top.
///
/// The outline is x-monotone, so it splits into vertical column strips that
/// reuse the bottom and top samples without adding interior points.
fn profile_face(grid: &Grid, side: f64) -> TriangleMesh {
    let z = side * grid.half_width;
    let normal = Vector3::z() * side;

    // Counter-clockwise in the XY plane: along the bottom, back over the top.
    let mut outline: Vec<Point3> = grid
        .xs
        .iter()
        .map(|&x| Point3::new(x, grid.bottom_y, z))
        .collect();
    outline.extend(
        grid.xs
            .iter()
            .zip(&grid.top_ys)
            .rev()
            .map(|(&x, &y)| Point3::new(x, y, z)),
    );

    let mut mesh = TriangleMesh::default();
    for p in &outline {
        mesh.push_vertex(*p, normal);
    }

    // One quad per column: bottom i, bottom i+1, top i+1, top i. The top
    // run is stored reversed, so top i sits at `last - i`.
    #[allow(clippy::cast_possible_truncation)]
    let n = grid.xs.len() as u32;
    let last = 2 * n - 1;
    for i in 0..n - 1 {
        push_quad(&mut mesh, [i, i + 1, last - i - 1, last - i], &normal);
    }
    mesh
}

/// The flat face at `x = side * half_length`.
fn end_face(grid: &Grid, side: f64) -> TriangleMesh {
    let x = side * grid.half_length;
    let normal = Vector3::x() * side;
    let top_y = if side > 0.0 {
        grid.top_ys[grid.top_ys.len() - 1]
    } else {
        grid.top_ys[0]
    };

    let mut mesh = TriangleMesh::default();
    for &z in &grid.zs {
        mesh.push_vertex(Point3::new(x, grid.bottom_y, z), normal);
        mesh.push_vertex(Point3::new(x, top_y, z), normal);
    }
    #[allow(clippy::cast_possible_truncation)]
    let n = grid.zs.len() as u32;
    for k in 0..n - 1 {
        let (b0, t0, b1, t1) = (2 * k, 2 * k + 1, 2 * k + 2, 2 * k + 3);
        push_quad(&mut mesh, [b0, b1, t1, t0], &normal);
    }
    mesh
}

/// Connects a row-major `rows × cols` vertex grid with quads facing `outward`.
#[allow(clippy::cast_possible_truncation)]
fn push_grid_quads(mesh: &mut TriangleMesh, rows: usize, cols: usize, outward: &Vector3) {
    let at = |i: usize, k: usize| (i * cols + k) as u32;
    for i in 0..rows - 1 {
        for k in 0..cols - 1 {
            push_quad(
                mesh,
                [at(i, k), at(i + 1, k), at(i + 1, k + 1), at(i, k + 1)],
                outward,
            );
        }
    }
}

fn push_quad(mesh: &mut TriangleMesh, [a, b, c, d]: [u32; 4], outward: &Vector3) {
    push_oriented(mesh, [a, b, c], outward);
    push_oriented(mesh, [a, c, d], outward);
}

/// Pushes a triangle, flipping it if its winding disagrees with `outward`.
fn push_oriented(mesh: &mut TriangleMesh, [a, b, c]: [u32; 3], outward: &Vector3) {
    let pa = mesh.vertices[a as usize];
    let pb = mesh.vertices[b as usize];
    let pc = mesh.vertices[c as usize];
    if (pb - pa).cross(&(pc - pa)).dot(outward) < 0.0 {
        mesh.indices.push([a, c, b]);
    } else {
        mesh.indices.push([a, b, c]);
    }
}
