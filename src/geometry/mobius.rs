//! The Möbius strip parametrization and its dense grid sampling.
//!
//! The closed-form map from `(u, v)` parameter coordinates to 3D position is
//!
//! ```text
//! x(u, v) = (R + v·cos(u/2)) · cos(u)
//! y(u, v) = (R + v·cos(u/2)) · sin(u)
//! z(u, v) =  v·sin(u/2)
//! ```
//!
//! with `u ∈ [0, 2π]` (one full turn, carrying the half-twist through
//! `u/2`) and `v ∈ [-w/2, w/2]` across the strip width.
//!
//! Everything here is purely functional and deliberately unvalidated: a
//! degenerate resolution produces a degenerate (single-point) grid rather
//! than an error, and downstream derivatives go NaN. The pipeline entry is
//! where parameters are rejected.

use std::f64::consts::PI;

use nalgebra::{DMatrix, Vector3};

use crate::domain::{MeshField, ParameterGrid, ShapeParams};

/// `count` evenly spaced samples covering `[start, end]` inclusive of both
/// endpoints. A single sample degenerates to `[start]`; zero samples to `[]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Evaluate the parametrization at a single `(u, v)` point.
pub fn surface_point(radius: f64, u: f64, v: f64) -> Vector3<f64> {
    let ring = radius + v * (u / 2.0).cos();
    Vector3::new(ring * u.cos(), ring * u.sin(), v * (u / 2.0).sin())
}

/// Build the parameter grid for a shape: `u` over one full turn and `v`
/// across the strip width, both with `resolution` samples.
pub fn parameter_grid(params: &ShapeParams) -> ParameterGrid {
    let rim = params.rim_offset();
    ParameterGrid {
        u: linspace(0.0, 2.0 * PI, params.resolution),
        v: linspace(-rim, rim, params.resolution),
    }
}

/// Map the full outer-product grid through the parametrization.
///
/// Rows index `v`, columns index `u` (the crate-wide grid convention).
pub fn mesh(params: &ShapeParams, grid: &ParameterGrid) -> MeshField {
    let nrows = grid.v.len();
    let ncols = grid.u.len();

    let mut x = DMatrix::zeros(nrows, ncols);
    let mut y = DMatrix::zeros(nrows, ncols);
    let mut z = DMatrix::zeros(nrows, ncols);

    for i in 0..nrows {
        for j in 0..ncols {
            let p = surface_point(params.radius, grid.u[j], grid.v[i]);
            x[(i, j)] = p.x;
            y[(i, j)] = p.y;
            z[(i, j)] = p.z;
        }
    }

    MeshField { x, y, z }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_endpoints() {
        let s = linspace(0.0, 2.0 * PI, 100);
        assert_eq!(s.len(), 100);
        assert_relative_eq!(s[0], 0.0);
        assert_relative_eq!(s[99], 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn linspace_degenerates_gracefully() {
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn grid_spans_the_parameter_domain() {
        let params = ShapeParams::new(1.0, 0.5, 7);
        let grid = parameter_grid(&params);
        assert_eq!(grid.u.len(), 7);
        assert_eq!(grid.v.len(), 7);
        assert_relative_eq!(grid.u[6], 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(grid.v[0], -0.25, epsilon = 1e-12);
        assert_relative_eq!(grid.v[6], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn centerline_starts_on_the_ring() {
        // At u = 0, v = 0 the surface sits on the centerline circle.
        let p = surface_point(1.5, 0.0, 0.0);
        assert_relative_eq!(p.x, 1.5);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn half_twist_glues_the_seam_with_flipped_width() {
        // After one full turn the strip rejoins itself with v negated:
        // point(2π, v) == point(0, -v).
        let radius = 1.0;
        for &v in &[-0.25, -0.1, 0.0, 0.2] {
            let end = surface_point(radius, 2.0 * PI, v);
            let start = surface_point(radius, 0.0, -v);
            assert_relative_eq!(end.x, start.x, epsilon = 1e-9);
            assert_relative_eq!(end.y, start.y, epsilon = 1e-9);
            assert_relative_eq!(end.z, start.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn mesh_shape_follows_the_grid() {
        let params = ShapeParams::new(1.0, 0.5, 9);
        let grid = parameter_grid(&params);
        let field = mesh(&params, &grid);
        assert_eq!(field.nrows(), 9);
        assert_eq!(field.ncols(), 9);

        // Spot-check one interior entry against the closed form.
        let p = surface_point(1.0, grid.u[3], grid.v[5]);
        assert_relative_eq!(field.x[(5, 3)], p.x);
        assert_relative_eq!(field.y[(5, 3)], p.y);
        assert_relative_eq!(field.z[(5, 3)], p.z);
    }

    #[test]
    fn single_point_grid_does_not_crash_mesh_generation() {
        let params = ShapeParams::new(1.0, 0.5, 1);
        let grid = parameter_grid(&params);
        let field = mesh(&params, &grid);
        assert_eq!(field.nrows(), 1);
        assert_eq!(field.ncols(), 1);
        assert_relative_eq!(field.x[(0, 0)], 0.75); // (R - w/2)·cos(0)
    }
}
