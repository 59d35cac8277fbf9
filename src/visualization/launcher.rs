//! Opens the viewer for a mode in a child process
//!
//! A windowing event loop can only be created once per process, so the menu
//! re-runs its own executable with the `view` subcommand for every selection
//! and waits for that window to close.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, SimError};
use crate::simulation::engine::Renderer;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Trajectory;

pub struct WindowRenderer {
    exe: PathBuf,            // executable that understands `view <MODE>`
    config: Option<PathBuf>, // forwarded as `--config`
    verbose: bool,           // forwarded as `--verbose`
}

impl WindowRenderer {
    pub fn new(exe: PathBuf, config: Option<PathBuf>, verbose: bool) -> Self {
        Self { exe, config, verbose }
    }

    /// Use the currently running executable
    pub fn current(config: Option<PathBuf>, verbose: bool) -> Result<Self> {
        Ok(Self::new(std::env::current_exe()?, config, verbose))
    }

    fn command(&self, selector: &str) -> Command {
        let mut cmd = Command::new(&self.exe);
        if let Some(path) = &self.config {
            cmd.arg("--config").arg(path);
        }
        if self.verbose {
            cmd.arg("--verbose");
        }
        cmd.arg("view").arg(selector);
        cmd
    }
}

impl Renderer for WindowRenderer {
    /// The child recomputes the same deterministic trajectory from the
    /// same configuration, so only the mode is passed along
    fn render(&mut self, scenario: &Scenario, _trajectory: &Trajectory) -> Result<()> {
        let mut cmd = self.command(scenario.mode.selector());
        debug!(command = ?cmd, "spawning viewer");

        let status = cmd.status()?;
        if !status.success() {
            return Err(SimError::Viewer(format!("{} viewer exited with {status}", scenario.mode)));
        }
        Ok(())
    }
}
