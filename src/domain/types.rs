//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during measurement
//! - exported to JSON
//! - reloaded later for plotting saved meshes

use std::path::PathBuf;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Shape parameters of the Möbius strip.
///
/// - `radius`: distance from the axis of revolution to the strip centerline.
/// - `width`: full width of the strip; the cross-section spans `[-width/2, width/2]`.
/// - `resolution`: number of samples along each parameter direction.
///
/// Immutable once constructed. A `resolution` below 2 cannot support numerical
/// derivatives; the pipeline rejects it, while the core geometry/math routines
/// accept it and produce NaN/zero results (see `app::pipeline::validate_params`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl ShapeParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    /// Half-width, i.e. the `v` value of the sampled boundary curve.
    pub fn rim_offset(self) -> f64 {
        self.width / 2.0
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.5,
            resolution: 100,
        }
    }
}

/// Parameter-space axis of the surface grid.
///
/// The grid convention is fixed throughout the crate:
///
/// - **rows** index `v` (width direction),
/// - **columns** index `u` (angular direction).
///
/// Derivative and integration routines take a `GridAxis` instead of a bare
/// axis number so a transposed call fails to express, not silently misintegrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Angular direction, `u ∈ [0, 2π]`. Varies along **columns**.
    U,
    /// Width direction, `v ∈ [-w/2, w/2]`. Varies along **rows**.
    V,
}

/// The 1D sample vectors spanning the parameter domain.
///
/// Both vectors are evenly spaced and inclusive of their endpoints. Derived
/// deterministically from `ShapeParams`; immutable after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

impl ParameterGrid {
    /// Nominal spacing of the `u` samples (NaN for fewer than two samples).
    pub fn u_step(&self) -> f64 {
        step_of(&self.u)
    }

    /// Nominal spacing of the `v` samples (NaN for fewer than two samples).
    pub fn v_step(&self) -> f64 {
        step_of(&self.v)
    }
}

fn step_of(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    (samples[samples.len() - 1] - samples[0]) / (samples.len() - 1) as f64
}

/// The sampled surface: one dense 2D array per coordinate.
///
/// Shape is `v.len() × u.len()` (rows = v, columns = u; see [`GridAxis`]).
/// Owned by the pipeline for its lifetime; estimators and renderers receive
/// read-only references.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshField {
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
    pub z: DMatrix<f64>,
}

impl MeshField {
    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }
}

/// The two scalar results of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub surface_area: f64,
    pub edge_length: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct MeasureConfig {
    pub params: ShapeParams,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Orbit angles for the projected surface view, in degrees.
    pub yaw_deg: f64,
    pub pitch_deg: f64,

    pub export_mesh: Option<PathBuf>,
    pub export_metrics: Option<PathBuf>,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            params: ShapeParams::default(),
            plot: true,
            plot_width: 100,
            plot_height: 30,
            yaw_deg: 35.0,
            pitch_deg: 25.0,
            export_mesh: None,
            export_metrics: None,
        }
    }
}

/// A saved mesh file (JSON).
///
/// The coordinate grids are stored row-major (outer index = v, inner = u) so
/// downstream visualization consumers can read plain 2D numeric arrays without
/// further transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshFile {
    pub tool: String,
    pub params: ShapeParams,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

/// A saved metrics file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsFile {
    pub tool: String,
    pub params: ShapeParams,
    pub surface_area: f64,
    pub edge_length: f64,
}
