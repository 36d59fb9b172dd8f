//! Shared measurement pipeline used by both the CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parameters -> grid -> mesh -> {surface area, edge length}
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//!
//! The pipeline is a single forward pass: no feedback, no iteration, no
//! shared mutable state. The returned `RunOutput` owns the grid and mesh for
//! its lifetime; estimators and renderers only ever borrow them.

use crate::domain::{MeasureConfig, MeshField, ParameterGrid, ShapeParams, SurfaceMetrics};
use crate::error::AppError;
use crate::{geometry, metrics};

/// All computed outputs of a single `mobius measure` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub grid: ParameterGrid,
    pub mesh: MeshField,
    pub metrics: SurfaceMetrics,
}

/// Reject shape parameters the numerical core cannot do anything meaningful with.
///
/// The core itself stays permissive (degenerate grids flow through as NaN or
/// zero); this gate is the one place where bad parameters become a hard error
/// instead of a silently meaningless number.
pub fn validate_params(params: &ShapeParams) -> Result<(), AppError> {
    if !(params.radius.is_finite() && params.radius > 0.0) {
        return Err(AppError::usage(format!(
            "Radius must be finite and > 0 (got {}).",
            params.radius
        )));
    }
    if !(params.width.is_finite() && params.width > 0.0) {
        return Err(AppError::usage(format!(
            "Width must be finite and > 0 (got {}).",
            params.width
        )));
    }
    if params.resolution < 2 {
        return Err(AppError::usage(format!(
            "Resolution must be >= 2 for numerical derivatives (got {}).",
            params.resolution
        )));
    }
    Ok(())
}

/// Execute the full measurement pipeline and return the computed outputs.
pub fn run_measure(config: &MeasureConfig) -> Result<RunOutput, AppError> {
    let params = config.params;
    validate_params(&params)?;

    let grid = geometry::parameter_grid(&params);
    let mesh = geometry::mesh(&params, &grid);

    let surface_area = metrics::surface_area(&mesh, &grid);
    let edge_length = metrics::edge_length(&params, &grid);

    Ok(RunOutput {
        grid,
        mesh,
        metrics: SurfaceMetrics {
            surface_area,
            edge_length,
        },
    })
}
