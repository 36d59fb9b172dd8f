//! ASCII/Unicode rendering of the projected surface for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Every mesh sample is projected, then drawn far-to-near so nearer samples
//! overwrite farther ones; the glyph encodes depth (darker = nearer).

use crate::domain::MeshField;
use crate::plot::projection::{pad_range, project_mesh, screen_bounds, Projected, Viewpoint};

/// Depth shading ramp, far to near.
const SHADES: [char; 5] = ['.', ':', '+', '*', '#'];

/// Render the projected surface into a fixed-size character grid.
pub fn render_ascii_surface(mesh: &MeshField, view: &Viewpoint, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut points = project_mesh(mesh, view);

    let mut out = String::new();
    out.push_str(&format!(
        "Surface: {}x{} samples | yaw={:.1}° pitch={:.1}°\n",
        mesh.nrows(),
        mesh.ncols(),
        view.yaw.to_degrees(),
        view.pitch.to_degrees(),
    ));

    let Some(((x_min, x_max), (y_min, y_max))) = screen_bounds(&points) else {
        out.push_str("(no finite samples to draw)\n");
        return out;
    };
    let (x_min, x_max) = pad_range(x_min, x_max, 0.05);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);
    let (depth_min, depth_max) = depth_range(&points);

    // Painter's order: far first, near last.
    points.retain(|p| p.sx.is_finite() && p.sy.is_finite() && p.depth.is_finite());
    points.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));

    let mut grid = vec![vec![' '; width]; height];
    for p in &points {
        let col = map_x(p.sx, x_min, x_max, width);
        let row = map_y(p.sy, y_min, y_max, height);
        grid[row][col] = shade(p.depth, depth_min, depth_max);
    }

    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn depth_range(points: &[Projected]) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        if p.depth.is_finite() {
            lo = lo.min(p.depth);
            hi = hi.max(p.depth);
        }
    }
    (lo, hi)
}

fn shade(depth: f64, lo: f64, hi: f64) -> char {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return SHADES[SHADES.len() - 1];
    }
    // Normalize so the nearest sample gets the densest glyph.
    let t = ((hi - depth) / (hi - lo)).clamp(0.0, 1.0);
    let idx = (t * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[idx.min(SHADES.len() - 1)]
}

fn map_x(x: f64, min: f64, max: f64, width: usize) -> usize {
    let t = ((x - min) / (max - min)).clamp(0.0, 1.0);
    ((t * (width - 1) as f64).round() as usize).min(width - 1)
}

fn map_y(y: f64, min: f64, max: f64, height: usize) -> usize {
    let t = ((y - min) / (max - min)).clamp(0.0, 1.0);
    // Terminal rows grow downward; flip so larger screen-y draws higher.
    let row = ((1.0 - t) * (height - 1) as f64).round() as usize;
    row.min(height - 1)
}
