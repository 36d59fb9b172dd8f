//! Debug bundle writer for inspecting a run's grid and convergence behavior.
//!
//! The bundle is a timestamped markdown file: the configuration, the grid
//! spacing, the metrics at the configured resolution, and a small convergence
//! table (half / configured / double resolution) for eyeballing whether the
//! discretization error is still moving.

use std::fs::create_dir_all;
use std::path::PathBuf;

use chrono::Local;

use crate::app::pipeline::run_measure;
use crate::domain::MeasureConfig;
use crate::error::AppError;

pub fn write_debug_bundle(config: &MeasureConfig) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::runtime(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("mobius_debug_n{}_{ts}.md", config.params.resolution));

    let body = render_bundle(config)?;
    std::fs::write(&path, body)
        .map_err(|e| AppError::runtime(format!("Failed to write debug file: {e}")))?;

    Ok(path)
}

fn render_bundle(config: &MeasureConfig) -> Result<String, AppError> {
    let params = config.params;
    let run = run_measure(config)?;

    let mut out = String::new();
    out.push_str("# mobius debug bundle\n");
    out.push_str(&format!("- generated: {}\n", Local::now().to_rfc3339()));
    out.push_str(&format!("- radius: {}\n", params.radius));
    out.push_str(&format!("- width: {}\n", params.width));
    out.push_str(&format!("- resolution: {}\n", params.resolution));
    out.push_str(&format!(
        "- grid: u step {:.8}, v step {:.8}\n",
        run.grid.u_step(),
        run.grid.v_step()
    ));

    out.push_str("\n## Convergence\n");
    out.push_str("| resolution | surface_area | edge_length |\n");
    out.push_str("| - | - | - |\n");
    for n in [params.resolution / 2, params.resolution, params.resolution * 2] {
        if n < 2 {
            continue;
        }
        let mut probe = config.clone();
        probe.params.resolution = n;
        let probe_run = run_measure(&probe)?;
        out.push_str(&format!(
            "| {n} | {:.5} | {:.5} |\n",
            probe_run.metrics.surface_area, probe_run.metrics.edge_length
        ));
    }

    out.push_str("\n## Rim samples (every 10th)\n");
    out.push_str("| u | x | y | z |\n");
    out.push_str("| - | - | - | - |\n");
    let rim = params.rim_offset();
    for &u in run.grid.u.iter().step_by(10) {
        let p = crate::geometry::surface_point(params.radius, u, rim);
        out.push_str(&format!(
            "| {u:.4} | {:.5} | {:.5} | {:.5} |\n",
            p.x, p.y, p.z
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeParams;

    #[test]
    fn bundle_contains_convergence_rows() {
        let config = MeasureConfig {
            params: ShapeParams::new(1.0, 0.5, 40),
            ..MeasureConfig::default()
        };
        let body = render_bundle(&config).unwrap();
        assert!(body.contains("# mobius debug bundle"));
        assert!(body.contains("| 20 |"));
        assert!(body.contains("| 40 |"));
        assert!(body.contains("| 80 |"));
    }
}
