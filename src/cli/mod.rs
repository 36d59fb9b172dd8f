//! Command-line parsing for the Möbius strip measurement tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the geometry/numerics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mobius", version, about = "Möbius Strip Surface Metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure surface area and edge length, print a report, and optionally plot/export.
    Measure(MeasureArgs),
    /// Plot a previously exported mesh JSON.
    Plot(PlotArgs),
    /// Launch the interactive surface viewer.
    ///
    /// This uses the same underlying measurement pipeline as `mobius measure`,
    /// but renders the projected surface in a terminal UI using Ratatui.
    Tui(MeasureArgs),
}

/// Common options for measuring and viewing.
#[derive(Debug, Parser, Clone)]
pub struct MeasureArgs {
    /// Centerline radius of the strip.
    #[arg(short = 'R', long, default_value_t = 1.0)]
    pub radius: f64,

    /// Full width of the strip (the cross-section spans [-w/2, w/2]).
    #[arg(short = 'w', long, default_value_t = 0.5)]
    pub width: f64,

    /// Samples per parameter direction (the mesh is resolution × resolution).
    #[arg(short = 'n', long, default_value_t = 100)]
    pub resolution: usize,

    /// Render an ASCII projection of the surface in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width_cols: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 30)]
    pub height_rows: usize,

    /// Horizontal orbit angle of the projected view, in degrees.
    #[arg(long, default_value_t = 35.0)]
    pub yaw: f64,

    /// Vertical orbit angle of the projected view, in degrees.
    #[arg(long, default_value_t = 25.0)]
    pub pitch: f64,

    /// Export the sampled mesh (X/Y/Z grids) to JSON.
    #[arg(long = "export-mesh")]
    pub export_mesh: Option<PathBuf>,

    /// Export the computed metrics to JSON.
    #[arg(long = "export-metrics")]
    pub export_metrics: Option<PathBuf>,
}

/// Options for plotting a saved mesh.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Mesh JSON file produced by `mobius measure --export-mesh`.
    #[arg(long, value_name = "JSON")]
    pub mesh: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width_cols: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 30)]
    pub height_rows: usize,

    /// Horizontal orbit angle, in degrees.
    #[arg(long, default_value_t = 35.0)]
    pub yaw: f64,

    /// Vertical orbit angle, in degrees.
    #[arg(long, default_value_t = 25.0)]
    pub pitch: f64,
}
