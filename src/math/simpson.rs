//! Composite Simpson integration over sampled functions.
//!
//! The integrand is given as samples `y` at coordinates `x` (strictly ordered,
//! not necessarily evenly spaced — the three-point rule below handles unequal
//! adjacent steps). Interval pairs are integrated with the quadratic rule; an
//! odd interval count is closed with a trapezoid on the final interval, which
//! is exact for linear integrands and keeps the composite rule total-order
//! O(h^2) or better.
//!
//! Nested 2D integration is expressed as two composable 1D passes:
//! [`integrate_along`] reduces a field to a 1D vector, which is then fed back
//! through [`simpson`].

use nalgebra::DMatrix;

use crate::domain::GridAxis;

/// Integrate sampled `y` over `x` with the composite Simpson rule.
///
/// Fewer than two samples span no interval and integrate to `0.0`; exactly two
/// samples degrade to a single trapezoid. NaN samples propagate into the sum.
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    if n < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < n {
        total += simpson_pair(y, x, i);
        i += 2;
    }
    if i + 1 < n {
        // Odd interval count: one interval remains past the last full pair.
        total += 0.5 * (y[n - 2] + y[n - 1]) * (x[n - 1] - x[n - 2]);
    }
    total
}

/// Quadratic rule over the interval pair starting at index `i`, allowing
/// unequal steps `h0 = x[i+1]-x[i]` and `h1 = x[i+2]-x[i+1]`.
fn simpson_pair(y: &[f64], x: &[f64], i: usize) -> f64 {
    let h0 = x[i + 1] - x[i];
    let h1 = x[i + 2] - x[i + 1];
    let hsum = h0 + h1;
    let hprod = h0 * h1;
    let ratio = h0 / h1;

    hsum / 6.0
        * ((2.0 - 1.0 / ratio) * y[i] + (hsum * hsum / hprod) * y[i + 1] + (2.0 - ratio) * y[i + 2])
}

/// Integrate a sampled 2D field along one grid axis, reducing it to 1D.
///
/// `coords` must be the sample vector of the axis being integrated out: the
/// `v` samples for [`GridAxis::V`] (integrating each column, yielding a vector
/// indexed by `u`), or the `u` samples for [`GridAxis::U`] (integrating each
/// row, yielding a vector indexed by `v`).
pub fn integrate_along(field: &DMatrix<f64>, coords: &[f64], axis: GridAxis) -> Vec<f64> {
    let (nrows, ncols) = field.shape();

    match axis {
        GridAxis::V => {
            debug_assert_eq!(coords.len(), nrows);
            (0..ncols)
                .map(|j| {
                    let col: Vec<f64> = (0..nrows).map(|i| field[(i, j)]).collect();
                    simpson(&col, coords)
                })
                .collect()
        }
        GridAxis::U => {
            debug_assert_eq!(coords.len(), ncols);
            (0..nrows)
                .map(|i| {
                    let row: Vec<f64> = (0..ncols).map(|j| field[(i, j)]).collect();
                    simpson(&row, coords)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
        let step = (b - a) / (n - 1) as f64;
        (0..n).map(|i| a + step * i as f64).collect()
    }

    #[test]
    fn simpson_of_sine_over_full_period_is_zero() {
        let x = linspace(0.0, 2.0 * std::f64::consts::PI, 101);
        let y: Vec<f64> = x.iter().map(|&t| t.sin()).collect();
        assert!(simpson(&y, &x).abs() < 1e-6);
    }

    #[test]
    fn simpson_is_exact_for_quadratics_on_even_interval_count() {
        let x = linspace(0.0, 1.0, 101);
        let y: Vec<f64> = x.iter().map(|&t| t * t).collect();
        assert_relative_eq!(simpson(&y, &x), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_handles_odd_interval_count() {
        // 100 samples -> 99 intervals; the final one is closed with a trapezoid.
        let x = linspace(0.0, 1.0, 100);
        let y: Vec<f64> = x.iter().map(|&t| t * t).collect();
        assert_relative_eq!(simpson(&y, &x), 1.0 / 3.0, epsilon = 1e-5);

        // Exact for a linear integrand regardless of parity.
        let y_lin: Vec<f64> = x.iter().map(|&t| 2.0 * t + 1.0).collect();
        assert_relative_eq!(simpson(&y_lin, &x), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_degenerates_below_three_samples() {
        assert_eq!(simpson(&[], &[]), 0.0);
        assert_eq!(simpson(&[4.0], &[0.0]), 0.0);
        // Two samples: trapezoid.
        assert_relative_eq!(simpson(&[1.0, 3.0], &[0.0, 2.0]), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn integrate_along_reduces_the_chosen_axis() {
        // field(i, j) = v[i]: integrating over v gives the same scalar for
        // every u column; integrating over u scales each row by the u span.
        let u = linspace(0.0, 2.0, 5);
        let v = linspace(0.0, 1.0, 5);
        let field = DMatrix::from_fn(v.len(), u.len(), |i, _j| v[i]);

        let over_v = integrate_along(&field, &v, GridAxis::V);
        assert_eq!(over_v.len(), u.len());
        for s in over_v {
            assert_relative_eq!(s, 0.5, epsilon = 1e-12);
        }

        let over_u = integrate_along(&field, &u, GridAxis::U);
        assert_eq!(over_u.len(), v.len());
        for (i, s) in over_u.iter().enumerate() {
            assert_relative_eq!(*s, v[i] * 2.0, epsilon = 1e-12);
        }
    }
}
