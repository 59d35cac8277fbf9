//! Runs one mode end to end
//!
//! Builds the `Scenario` for a `Mode`, integrates it, logs a summary and
//! hands the finished trajectory to a `Renderer`. The trajectory is complete
//! before the renderer sees it.

use std::fmt;
use std::io::Write;

use tracing::{info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::menu::ModeRunner;
use crate::simulation::scenario::{Mode, Scenario};
use crate::simulation::states::{NVec2, Trajectory};

/// Consumer of a finished trajectory (window, text, ...)
pub trait Renderer {
    fn render(&mut self, scenario: &Scenario, trajectory: &Trajectory) -> Result<()>;
}

/// Short numeric description of a trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySummary {
    pub mode: Mode,
    pub points: usize,
    pub first: Option<NVec2>,
    pub last: Option<NVec2>,
    pub radius_range: Option<(f64, f64)>,
    pub non_finite: bool,
}

impl TrajectorySummary {
    pub fn new(mode: Mode, trajectory: &Trajectory) -> Self {
        Self {
            mode,
            points: trajectory.len(),
            first: trajectory.first().copied(),
            last: trajectory.last().copied(),
            radius_range: trajectory.radius_range(),
            non_finite: trajectory.has_non_finite(),
        }
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} points)", self.mode.title(), self.points)?;
        if let (Some(a), Some(b)) = (self.first, self.last) {
            writeln!(f, "  first: ({:.6e}, {:.6e}) m", a.x, a.y)?;
            writeln!(f, "  last:  ({:.6e}, {:.6e}) m", b.x, b.y)?;
        }
        if let Some((lo, hi)) = self.radius_range {
            writeln!(f, "  radius: {:.6e} .. {:.6e} m", lo, hi)?;
        }
        if self.non_finite {
            writeln!(f, "  warning: trajectory contains non-finite samples")?;
        }
        Ok(())
    }
}

/// Writes a `TrajectorySummary` for every rendered trajectory
pub struct SummaryRenderer<W: Write> {
    out: W,
}

impl<W: Write> SummaryRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for SummaryRenderer<W> {
    fn render(&mut self, scenario: &Scenario, trajectory: &Trajectory) -> Result<()> {
        let summary = TrajectorySummary::new(scenario.mode, trajectory);
        write!(self.out, "{summary}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Ties a configuration to a renderer and runs modes on demand
pub struct Engine<R: Renderer> {
    config: ScenarioConfig,
    renderer: R,
}

impl<R: Renderer> Engine<R> {
    pub fn new(config: ScenarioConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Integrate `mode`, log its summary, then render it
    pub fn run_mode(&mut self, mode: Mode) -> Result<Trajectory> {
        let scenario = Scenario::build_scenario(&self.config, mode);
        let trajectory = scenario.integrate();

        let summary = TrajectorySummary::new(mode, &trajectory);
        info!(
            mode = %mode,
            points = summary.points,
            final_radius = trajectory.last().map(|p| p.norm()),
            "trajectory computed"
        );
        if summary.non_finite {
            warn!(mode = %mode, "trajectory passed through the singularity and contains non-finite samples");
        }

        self.renderer.render(&scenario, &trajectory)?;
        Ok(trajectory)
    }
}

impl<R: Renderer> ModeRunner for Engine<R> {
    fn run(&mut self, mode: Mode) -> Result<()> {
        self.run_mode(mode).map(|_| ())
    }
}
