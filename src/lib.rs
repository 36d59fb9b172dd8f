//! `mobius-metrics` library crate.
//!
//! The binary (`mobius`) is a thin wrapper around this library so that:
//!
//! - the numerical core is testable without spawning processes
//! - modules are reusable (e.g., future GUI/notebook front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod tui;
