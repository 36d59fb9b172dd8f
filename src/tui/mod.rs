//! Ratatui-based terminal UI.
//!
//! The TUI shows the projected Möbius surface next to a settings/metrics
//! panel. Arrow keys orbit the viewpoint, `+`/`-` change the grid resolution
//! (re-running the measurement pipeline), and `d` writes a debug bundle.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nalgebra::Vector3;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::pipeline::{run_measure, RunOutput};
use crate::domain::MeasureConfig;
use crate::error::AppError;
use crate::plot::projection::{pad_range, project, screen_bounds, project_mesh, wireframe, Viewpoint};

mod surface_chart;

use surface_chart::SurfaceChart;

/// Resolution bounds for the interactive `+`/`-` adjustment.
const MIN_RESOLUTION: usize = 8;
const MAX_RESOLUTION: usize = 1024;

/// Orbit step per arrow-key press, in degrees.
const ORBIT_STEP_DEG: f64 = 5.0;

/// Start the TUI.
pub fn run(config: MeasureConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: MeasureConfig,
    yaw_deg: f64,
    pitch_deg: f64,
    status: String,
    run: RunOutput,
}

impl App {
    fn new(config: MeasureConfig) -> Result<Self, AppError> {
        let run = run_measure(&config)?;
        Ok(Self {
            yaw_deg: config.yaw_deg,
            pitch_deg: config.pitch_deg,
            status: "Arrows orbit | +/- resolution | r reset | d debug | q quit".to_string(),
            config,
            run,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Left => self.yaw_deg -= ORBIT_STEP_DEG,
            KeyCode::Right => self.yaw_deg += ORBIT_STEP_DEG,
            KeyCode::Up => self.pitch_deg = (self.pitch_deg + ORBIT_STEP_DEG).min(89.0),
            KeyCode::Down => self.pitch_deg = (self.pitch_deg - ORBIT_STEP_DEG).max(-89.0),
            KeyCode::Char('r') => {
                self.yaw_deg = self.config.yaw_deg;
                self.pitch_deg = self.config.pitch_deg;
                self.status = "View reset.".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let n = (self.config.params.resolution * 2).min(MAX_RESOLUTION);
                self.set_resolution(n)?;
            }
            KeyCode::Char('-') => {
                let n = (self.config.params.resolution / 2).max(MIN_RESOLUTION);
                self.set_resolution(n)?;
            }
            KeyCode::Char('d') => {
                match crate::debug::write_debug_bundle(&self.config) {
                    Ok(path) => {
                        self.status = format!("Wrote debug bundle: {}", path.display());
                    }
                    Err(err) => {
                        self.status = format!("Debug write failed: {err}");
                    }
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn set_resolution(&mut self, resolution: usize) -> Result<(), AppError> {
        if resolution == self.config.params.resolution {
            return Ok(());
        }
        self.config.params.resolution = resolution;
        self.run = run_measure(&self.config)?;
        self.status = format!("Resolution: n={resolution}");
        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(24)])
            .split(f.area());

        self.draw_sidebar(f, chunks[0]);
        self.draw_chart(f, chunks[1]);
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect) {
        let params = &self.config.params;
        let metrics = &self.run.metrics;

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White);
        let result = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Radius (R): ", label),
                Span::styled(format!("{:.3}", params.radius), value),
            ]),
            Line::from(vec![
                Span::styled("Width  (w): ", label),
                Span::styled(format!("{:.3}", params.width), value),
            ]),
            Line::from(vec![
                Span::styled("Resolution: ", label),
                Span::styled(format!("n={}", params.resolution), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Surface area: ", label),
                Span::styled(format!("{:.5}", metrics.surface_area), result),
            ]),
            Line::from(vec![
                Span::styled("Edge length:  ", label),
                Span::styled(format!("{:.5}", metrics.edge_length), result),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("View: ", label),
                Span::styled(
                    format!("yaw={:.0}° pitch={:.0}°", self.yaw_deg, self.pitch_deg),
                    value,
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(self.status.clone(), Style::default().fg(Color::Yellow))),
        ];

        let panel = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" mobius - surface metrics "),
        );
        f.render_widget(panel, area);
    }

    fn draw_chart(&self, f: &mut Frame, area: Rect) {
        let view = Viewpoint::from_degrees(self.yaw_deg, self.pitch_deg);

        // Thin the wireframe so large meshes stay legible in terminal cells.
        let stride = (self.run.mesh.nrows() / 24).max(1);
        let wires = wireframe(&self.run.mesh, &view, stride);

        // The rim polyline is the last mesh row (v = +w/2), reprojected.
        let rim: Vec<(f64, f64)> = {
            let mesh = &self.run.mesh;
            let i = mesh.nrows().saturating_sub(1);
            (0..mesh.ncols())
                .map(|j| {
                    let p = project(
                        &Vector3::new(mesh.x[(i, j)], mesh.y[(i, j)], mesh.z[(i, j)]),
                        &view,
                    );
                    (p.sx, p.sy)
                })
                .collect()
        };

        let points = project_mesh(&self.run.mesh, &view);
        let Some(((x0, x1), (y0, y1))) = screen_bounds(&points) else {
            return;
        };
        let (x0, x1) = pad_range(x0, x1, 0.05);
        let (y0, y1) = pad_range(y0, y1, 0.05);

        let chart = SurfaceChart {
            wires: &wires,
            rim: &rim,
            x_bounds: [x0, x1],
            y_bounds: [y0, y1],
        };
        let block = Block::default().borders(Borders::ALL).title(" surface ");
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(chart, inner);
    }
}
