//! Reporting utilities: formatted terminal output for a measurement run.
//!
//! We keep formatting code in one place so:
//! - the geometry/numerics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{MeasureConfig, SurfaceMetrics};

/// Format the full run summary (shape, grid, and results).
pub fn format_run_summary(config: &MeasureConfig, run: &RunOutput) -> String {
    let params = &config.params;
    let grid = &run.grid;

    let mut out = String::new();

    out.push_str("=== mobius - Möbius Strip Surface Metrics ===\n");
    out.push_str(&format!("Radius (R):  {:.3}\n", params.radius));
    out.push_str(&format!("Width  (w):  {:.3}\n", params.width));
    out.push_str(&format!(
        "Resolution:  n={} ({}x{} grid)\n",
        params.resolution,
        run.mesh.nrows(),
        run.mesh.ncols()
    ));
    out.push_str(&format!(
        "Grid: u=[{:.3}, {:.3}] step={:.6} | v=[{:.3}, {:.3}] step={:.6}\n",
        grid.u.first().copied().unwrap_or(f64::NAN),
        grid.u.last().copied().unwrap_or(f64::NAN),
        grid.u_step(),
        grid.v.first().copied().unwrap_or(f64::NAN),
        grid.v.last().copied().unwrap_or(f64::NAN),
        grid.v_step(),
    ));

    out.push('\n');
    out.push_str(&format_metrics(&run.metrics));

    out
}

/// Format the two scalar results to 5 decimal places.
pub fn format_metrics(metrics: &SurfaceMetrics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Approximate surface area: {:.5}\n",
        metrics.surface_area
    ));
    out.push_str(&format!(
        "Approximate edge length:  {:.5}\n",
        metrics.edge_length
    ));
    out
}
