//! Read/write mesh and metrics JSON files.
//!
//! Mesh JSON is the "portable" representation of a sampled surface:
//! - the shape parameters that produced it
//! - the `u`/`v` sample vectors
//! - X/Y/Z coordinate grids stored row-major (outer index = v, inner = u)
//!
//! so downstream visualization consumers can read plain 2D numeric arrays
//! without further transformation. The schemas are defined by
//! `domain::MeshFile` and `domain::MetricsFile`.

use std::fs::File;
use std::path::Path;

use nalgebra::DMatrix;

use crate::app::pipeline::RunOutput;
use crate::domain::{MeshField, MeshFile, MetricsFile, ShapeParams, SurfaceMetrics};
use crate::error::AppError;

const TOOL_TAG: &str = "mobius";

/// Write the sampled mesh to a JSON file.
pub fn write_mesh_json(path: &Path, params: &ShapeParams, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create mesh JSON '{}': {e}", path.display()))
    })?;

    let mesh_file = MeshFile {
        tool: TOOL_TAG.to_string(),
        params: *params,
        u: run.grid.u.clone(),
        v: run.grid.v.clone(),
        x: matrix_rows(&run.mesh.x),
        y: matrix_rows(&run.mesh.y),
        z: matrix_rows(&run.mesh.z),
    };

    serde_json::to_writer_pretty(file, &mesh_file)
        .map_err(|e| AppError::usage(format!("Failed to write mesh JSON: {e}")))?;

    Ok(())
}

/// Write the computed metrics to a JSON file.
pub fn write_metrics_json(
    path: &Path,
    params: &ShapeParams,
    metrics: &SurfaceMetrics,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create metrics JSON '{}': {e}",
            path.display()
        ))
    })?;

    let metrics_file = MetricsFile {
        tool: TOOL_TAG.to_string(),
        params: *params,
        surface_area: metrics.surface_area,
        edge_length: metrics.edge_length,
    };

    serde_json::to_writer_pretty(file, &metrics_file)
        .map_err(|e| AppError::usage(format!("Failed to write metrics JSON: {e}")))?;

    Ok(())
}

/// Read a mesh JSON file back into a drawable coordinate field.
pub fn read_mesh_json(path: &Path) -> Result<MeshField, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open mesh JSON '{}': {e}", path.display()))
    })?;
    let mesh_file: MeshFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid mesh JSON: {e}")))?;

    Ok(MeshField {
        x: matrix_from_rows(&mesh_file.x)?,
        y: matrix_from_rows(&mesh_file.y)?,
        z: matrix_from_rows(&mesh_file.z)?,
    })
}

fn matrix_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
        .collect()
}

fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>, AppError> {
    let nrows = rows.len();
    let ncols = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(AppError::usage(
            "Invalid mesh JSON: coordinate grid rows have unequal lengths.",
        ));
    }
    Ok(DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_measure;
    use crate::domain::MeasureConfig;

    #[test]
    fn mesh_json_round_trips() {
        let config = MeasureConfig {
            params: ShapeParams::new(1.0, 0.5, 6),
            ..MeasureConfig::default()
        };
        let run = run_measure(&config).unwrap();

        let path = std::env::temp_dir().join("mobius_mesh_roundtrip_test.json");
        write_mesh_json(&path, &config.params, &run).unwrap();
        let reloaded = read_mesh_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(reloaded, run.mesh);
    }

    #[test]
    fn ragged_grid_rows_are_rejected() {
        let err = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn metrics_json_records_both_scalars() {
        let params = ShapeParams::default();
        let metrics = SurfaceMetrics {
            surface_area: 3.14991,
            edge_length: 6.33365,
        };

        let path = std::env::temp_dir().join("mobius_metrics_test.json");
        write_metrics_json(&path, &params, &metrics).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let parsed: MetricsFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.tool, "mobius");
        assert_eq!(parsed.surface_area, 3.14991);
        assert_eq!(parsed.edge_length, 6.33365);
    }
}
