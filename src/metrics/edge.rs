//! Arc length of the strip's rim at `v = +w/2`.
//!
//! The boundary curve is evaluated directly from the parametrization at every
//! `u` sample — it is never sliced out of the mesh, so this estimator stands
//! on its own numerically and its error is independent of the surface-area
//! pass.
//!
//! Scope note: a Möbius strip has a single connected boundary that traverses
//! both nominal edges (`v = ±w/2`) before closing. This estimator measures
//! only the curve at the fixed offset `v = +w/2` over one full turn of `u`,
//! which is half of that closed boundary.

use nalgebra::Vector3;

use crate::domain::{ParameterGrid, ShapeParams};
use crate::math::{gradient, simpson};

/// Estimate the arc length of the `v = +w/2` rim over the full `u` range.
///
/// Converges to the analytic arc length of the rim curve as the resolution
/// grows. Degenerate grids produce NaN derivatives and a 0.0 integral.
pub fn edge_length(params: &ShapeParams, grid: &ParameterGrid) -> f64 {
    let rim = params.rim_offset();

    let n = grid.u.len();
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);
    for &u in &grid.u {
        let p = crate::geometry::surface_point(params.radius, u, rim);
        x.push(p.x);
        y.push(p.y);
        z.push(p.z);
    }

    let dx = gradient(&x, &grid.u);
    let dy = gradient(&y, &grid.u);
    let dz = gradient(&z, &grid.u);

    let speed: Vec<f64> = (0..n)
        .map(|k| Vector3::new(dx[k], dy[k], dz[k]).norm())
        .collect();

    simpson(&speed, &grid.u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::geometry::{linspace, parameter_grid};

    /// Independent reference: integrate the *analytic* rim speed
    /// `|dr/du|` at `v = w/2` at high resolution, bypassing finite differences.
    fn reference_edge_length(radius: f64, width: f64, samples: usize) -> f64 {
        let rim = width / 2.0;
        let u = linspace(0.0, 2.0 * std::f64::consts::PI, samples);
        let speed: Vec<f64> = u
            .iter()
            .map(|&t| {
                let (half_sin, half_cos) = (t / 2.0).sin_cos();
                let ring = radius + rim * half_cos;
                let dx = -(rim * half_sin / 2.0) * t.cos() - ring * t.sin();
                let dy = -(rim * half_sin / 2.0) * t.sin() + ring * t.cos();
                let dz = rim * half_cos / 2.0;
                Vector3::new(dx, dy, dz).norm()
            })
            .collect();
        simpson(&speed, &u)
    }

    fn estimate(radius: f64, width: f64, resolution: usize) -> f64 {
        let params = ShapeParams::new(radius, width, resolution);
        let grid = parameter_grid(&params);
        edge_length(&params, &grid)
    }

    #[test]
    fn matches_the_analytic_reference_closely() {
        let reference = reference_edge_length(1.0, 0.5, 4001);
        // The analytic value for R=1, w=0.5 is ≈ 6.33365.
        assert_relative_eq!(reference, 6.33365, max_relative = 1e-4);

        let estimate = estimate(1.0, 0.5, 500);
        assert_relative_eq!(estimate, reference, max_relative = 0.001);
    }

    #[test]
    fn reference_defaults_land_in_the_expected_band() {
        let length = estimate(1.0, 0.5, 200);
        assert!(length > 6.30 && length < 6.36, "edge length at n=200 was {length}");
    }

    #[test]
    fn narrow_strip_rim_approaches_the_centerline_circle() {
        // As w → 0 the rim collapses onto the centerline circle of length 2πR.
        let length = estimate(1.0, 1e-6, 501);
        assert_relative_eq!(length, 2.0 * std::f64::consts::PI, max_relative = 1e-3);
    }

    #[test]
    fn edge_length_scales_linearly_with_shape_size() {
        let k = 3.0;
        let base = estimate(1.0, 0.5, 150);
        let scaled = estimate(k * 1.0, k * 0.5, 150);
        assert_relative_eq!(scaled, k * base, max_relative = 1e-9);
    }

    #[test]
    fn edge_length_is_non_negative_for_valid_shapes() {
        for &(r, w, n) in &[(1.0, 0.5, 2), (1.0, 0.5, 3), (0.2, 0.05, 40)] {
            let l = estimate(r, w, n);
            assert!(l >= 0.0 && l.is_finite(), "edge_length({r}, {w}, {n}) = {l}");
        }
    }

    #[test]
    fn single_sample_rim_integrates_to_zero() {
        assert_eq!(estimate(1.0, 0.5, 1), 0.0);
    }

    #[test]
    fn error_shrinks_as_resolution_doubles() {
        let reference = reference_edge_length(1.0, 0.5, 4001);
        let err = |n: usize| (estimate(1.0, 0.5, n) - reference).abs();
        let (e100, e200, e400) = (err(100), err(200), err(400));
        assert!(e200 < e100, "error did not shrink: {e100} -> {e200}");
        assert!(e400 < e200, "error did not shrink: {e200} -> {e400}");
    }
}
