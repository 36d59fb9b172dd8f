//! Finite-difference derivative approximations over sampled functions.
//!
//! The convention matches the standard gradient approximation:
//!
//! - central differences in the interior: `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])`
//! - one-sided differences at the first and last sample
//!
//! Spacing is always recovered from the coordinate vector, never assumed to
//! be 1. Central differences are second-order accurate on evenly spaced
//! samples; the one-sided boundary stencils are first-order.

use nalgebra::DMatrix;

use crate::domain::GridAxis;

/// Derivative of sampled `y` with respect to `x`, same length as the input.
///
/// Fewer than two samples leave no difference to take: a single sample yields
/// `[NaN]` and an empty input yields an empty output. NaN inputs propagate.
pub fn gradient(y: &[f64], x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![f64::NAN];
    }

    let mut out = vec![0.0; n];
    out[0] = (y[1] - y[0]) / (x[1] - x[0]);
    out[n - 1] = (y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]);
    for i in 1..n - 1 {
        out[i] = (y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1]);
    }
    out
}

/// Partial derivative of a sampled 2D field along one grid axis.
///
/// `coords` must be the sample vector of the chosen axis: the `u` samples for
/// [`GridAxis::U`] (differentiating along columns within each row) or the `v`
/// samples for [`GridAxis::V`] (along rows within each column).
pub fn gradient_along(field: &DMatrix<f64>, coords: &[f64], axis: GridAxis) -> DMatrix<f64> {
    let (nrows, ncols) = field.shape();
    let mut out = DMatrix::zeros(nrows, ncols);

    match axis {
        GridAxis::U => {
            debug_assert_eq!(coords.len(), ncols);
            for i in 0..nrows {
                let row: Vec<f64> = (0..ncols).map(|j| field[(i, j)]).collect();
                let g = gradient(&row, coords);
                for j in 0..ncols {
                    out[(i, j)] = g[j];
                }
            }
        }
        GridAxis::V => {
            debug_assert_eq!(coords.len(), nrows);
            for j in 0..ncols {
                let col: Vec<f64> = (0..nrows).map(|i| field[(i, j)]).collect();
                let g = gradient(&col, coords);
                for i in 0..nrows {
                    out[(i, j)] = g[i];
                }
            }
        }
    }

    out
}
