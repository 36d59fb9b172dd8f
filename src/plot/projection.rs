//! Orthographic 3D -> 2D projection of the sampled mesh.
//!
//! Both terminal renderers (ASCII and the Plotters TUI chart) work from the
//! same projection: orbit the viewpoint around the surface with a yaw
//! rotation about the vertical axis followed by a pitch rotation about the
//! horizontal screen axis, then drop the depth coordinate.

use nalgebra::Vector3;

use crate::domain::MeshField;

/// Orbit angles of the projected view, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub yaw: f64,
    pub pitch: f64,
}

impl Viewpoint {
    pub fn from_degrees(yaw_deg: f64, pitch_deg: f64) -> Self {
        Self {
            yaw: yaw_deg.to_radians(),
            pitch: pitch_deg.to_radians(),
        }
    }
}

/// A projected point: screen coordinates plus the remaining depth.
///
/// Depth grows away from the viewer, so smaller values are nearer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub sx: f64,
    pub sy: f64,
    pub depth: f64,
}

/// Project one 3D point through the viewpoint.
///
/// At `yaw = pitch = 0` this maps `(x, y, z)` to screen `(x, z)` with depth `y`.
pub fn project(p: &Vector3<f64>, view: &Viewpoint) -> Projected {
    let (sin_yaw, cos_yaw) = view.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = view.pitch.sin_cos();

    // Rotate about the vertical (z) axis.
    let x1 = p.x * cos_yaw - p.y * sin_yaw;
    let y1 = p.x * sin_yaw + p.y * cos_yaw;

    // Rotate about the horizontal screen (x) axis and split depth from height.
    Projected {
        sx: x1,
        sy: y1 * sin_pitch + p.z * cos_pitch,
        depth: y1 * cos_pitch - p.z * sin_pitch,
    }
}

/// Project every mesh sample, row-major (outer loop v, inner loop u).
pub fn project_mesh(mesh: &MeshField, view: &Viewpoint) -> Vec<Projected> {
    let mut out = Vec::with_capacity(mesh.nrows() * mesh.ncols());
    for i in 0..mesh.nrows() {
        for j in 0..mesh.ncols() {
            let p = Vector3::new(mesh.x[(i, j)], mesh.y[(i, j)], mesh.z[(i, j)]);
            out.push(project(&p, view));
        }
    }
    out
}

/// Projected wireframe polylines: one per sampled row and column, thinned by
/// `stride` to keep terminal charts readable at high resolutions. The final
/// row and column are always included so the rim stays visible.
pub fn wireframe(mesh: &MeshField, view: &Viewpoint, stride: usize) -> Vec<Vec<(f64, f64)>> {
    let stride = stride.max(1);
    let (nrows, ncols) = (mesh.nrows(), mesh.ncols());
    let mut lines = Vec::new();

    let row_line = |i: usize| -> Vec<(f64, f64)> {
        (0..ncols)
            .map(|j| {
                let p = project(
                    &Vector3::new(mesh.x[(i, j)], mesh.y[(i, j)], mesh.z[(i, j)]),
                    view,
                );
                (p.sx, p.sy)
            })
            .collect()
    };
    let col_line = |j: usize| -> Vec<(f64, f64)> {
        (0..nrows)
            .map(|i| {
                let p = project(
                    &Vector3::new(mesh.x[(i, j)], mesh.y[(i, j)], mesh.z[(i, j)]),
                    view,
                );
                (p.sx, p.sy)
            })
            .collect()
    };

    for i in (0..nrows).step_by(stride) {
        lines.push(row_line(i));
    }
    if nrows > 1 && (nrows - 1) % stride != 0 {
        lines.push(row_line(nrows - 1));
    }
    for j in (0..ncols).step_by(stride) {
        lines.push(col_line(j));
    }
    if ncols > 1 && (ncols - 1) % stride != 0 {
        lines.push(col_line(ncols - 1));
    }

    lines
}

/// Finite bounding box of projected screen coordinates.
pub fn screen_bounds(points: &[Projected]) -> Option<((f64, f64), (f64, f64))> {
    let mut found = false;
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        if !(p.sx.is_finite() && p.sy.is_finite()) {
            continue;
        }
        found = true;
        x_min = x_min.min(p.sx);
        x_max = x_max.max(p.sx);
        y_min = y_min.min(p.sy);
        y_max = y_max.max(p.sy);
    }
    if found {
        Some(((x_min, x_max), (y_min, y_max)))
    } else {
        None
    }
}

/// Pad a range on both sides by a fraction of its span (minimum absolute pad
/// keeps degenerate ranges drawable).
pub fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-6);
    (min - pad, max + pad)
}
