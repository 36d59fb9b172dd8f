//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the measurement pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, MeasureArgs, PlotArgs};
use crate::domain::{MeasureConfig, ShapeParams};
use crate::error::AppError;
use crate::plot::Viewpoint;

pub mod pipeline;

/// Entry point for the `mobius` binary.
pub fn run() -> Result<(), AppError> {
    // We want `mobius` and `mobius -n 300` to behave like `mobius tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Measure(args) => handle_measure(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_measure(args: MeasureArgs) -> Result<(), AppError> {
    let config = measure_config_from_args(&args);
    let run = pipeline::run_measure(&config)?;

    println!("{}", crate::report::format_run_summary(&config, &run));

    if config.plot {
        let view = Viewpoint::from_degrees(config.yaw_deg, config.pitch_deg);
        let plot = crate::plot::render_ascii_surface(
            &run.mesh,
            &view,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_mesh {
        crate::io::export::write_mesh_json(path, &config.params, &run)?;
    }
    if let Some(path) = &config.export_metrics {
        crate::io::export::write_metrics_json(path, &config.params, &run.metrics)?;
    }

    Ok(())
}

fn handle_tui(args: MeasureArgs) -> Result<(), AppError> {
    crate::tui::run(measure_config_from_args(&args))
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let mesh = crate::io::export::read_mesh_json(&args.mesh)?;

    let view = Viewpoint::from_degrees(args.yaw, args.pitch);
    let plot = crate::plot::render_ascii_surface(&mesh, &view, args.width_cols, args.height_rows);
    println!("{plot}");
    Ok(())
}

pub fn measure_config_from_args(args: &MeasureArgs) -> MeasureConfig {
    MeasureConfig {
        params: ShapeParams::new(args.radius, args.width, args.resolution),
        plot: args.plot && !args.no_plot,
        plot_width: args.width_cols,
        plot_height: args.height_rows,
        yaw_deg: args.yaw,
        pitch_deg: args.pitch,
        export_mesh: args.export_mesh.clone(),
        export_metrics: args.export_metrics.clone(),
    }
}

/// Rewrite argv so `mobius` defaults to `mobius tui`.
///
/// Rules:
/// - `mobius`                      -> `mobius tui`
/// - `mobius -n 300 ...`           -> `mobius tui -n 300 ...`
/// - `mobius --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "measure" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_rewrites_to_tui() {
        assert_eq!(rewrite_args(argv(&["mobius"])), argv(&["mobius", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["mobius", "-n", "300"])),
            argv(&["mobius", "tui", "-n", "300"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["mobius", "measure", "-n", "50"])),
            argv(&["mobius", "measure", "-n", "50"])
        );
        assert_eq!(rewrite_args(argv(&["mobius", "--help"])), argv(&["mobius", "--help"]));
    }
}
