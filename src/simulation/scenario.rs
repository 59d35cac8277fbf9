//! Build fully-initialized runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and a `Mode`, and produces a
//! `Scenario` runtime bundle containing:
//! - the physical constants (`Physics`)
//! - the step count and step size (`RunParameters`)
//! - the initial state, Cartesian or polar depending on the mode
//!
//! `Scenario::integrate` runs the matching integrator and returns the
//! finished `Trajectory`.

use std::fmt;
use std::str::FromStr;

use crate::configuration::config::{NewtonianConfig, ScenarioConfig};
use crate::simulation::forces::{NewtonianCentral, PrecessionCorrected};
use crate::simulation::integrator::{integrate_newtonian, integrate_relativistic};
use crate::simulation::params::{Physics, RunParameters};
use crate::simulation::states::{NVec2, RadialState, State2, Trajectory};

/// The three selectable simulation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    NewtonianStatic,   // menu "1"
    NewtonianAnimated, // menu "2"
    Relativistic,      // menu "3"
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::NewtonianStatic, Mode::NewtonianAnimated, Mode::Relativistic];

    /// Menu selector token for this mode
    pub fn selector(self) -> &'static str {
        match self {
            Mode::NewtonianStatic => "1",
            Mode::NewtonianAnimated => "2",
            Mode::Relativistic => "3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::NewtonianStatic => "static",
            Mode::NewtonianAnimated => "animated",
            Mode::Relativistic => "relativistic",
        }
    }

    /// Window title used by the viewer
    pub fn title(self) -> &'static str {
        match self {
            Mode::NewtonianStatic => "Newtonian Gravity - Particle Trajectory",
            Mode::NewtonianAnimated => "Particle Falling into a Black Hole (Animation)",
            Mode::Relativistic => "Relativistic Orbit Near a Black Hole",
        }
    }

    /// Menu description
    pub fn label(self) -> &'static str {
        match self {
            Mode::NewtonianStatic => "Newtonian gravity (static trajectory)",
            Mode::NewtonianAnimated => "Newtonian gravity (animation)",
            Mode::Relativistic => "Approximate relativistic orbit",
        }
    }

    /// Replayed frame by frame rather than drawn as one curve
    pub fn is_animated(self) -> bool {
        matches!(self, Mode::NewtonianAnimated)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    /// Accepts the menu selector (`1`, `2`, `3`) or the mode name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| s == m.selector() || s.eq_ignore_ascii_case(m.name()))
            .ok_or_else(|| format!("unknown mode `{s}` (expected 1, 2, 3, static, animated or relativistic)"))
    }
}

/// Initial conditions in the form the mode's integrator expects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialState {
    Cartesian(State2),
    Polar(RadialState),
}

/// Runtime bundle for one mode, built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub mode: Mode,
    pub physics: Physics,
    pub run: RunParameters,
    pub initial: InitialState,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig, mode: Mode) -> Self {
        // Physics (runtime) from PhysicsConfig
        let physics = Physics {
            g: cfg.physics.g,
            mass: cfg.physics.mass,
            c: cfg.physics.c,
        };

        let (run, initial) = match mode {
            Mode::NewtonianStatic => newtonian_start(&cfg.newtonian_static),
            Mode::NewtonianAnimated => newtonian_start(&cfg.newtonian_animated),
            Mode::Relativistic => {
                let rel = &cfg.relativistic;
                (
                    RunParameters { steps: rel.steps, dt: rel.dt },
                    InitialState::Polar(RadialState::new(rel.r, rel.v_r, rel.v_t)),
                )
            }
        };

        Self {
            mode,
            physics,
            run,
            initial,
        }
    }

    /// Run the mode's integrator to completion
    pub fn integrate(&self) -> Trajectory {
        match self.initial {
            InitialState::Cartesian(state) => {
                let gravity = NewtonianCentral::from_physics(&self.physics);
                integrate_newtonian(state, &gravity, &self.run)
            }
            InitialState::Polar(state) => {
                let law = PrecessionCorrected::from_physics(&self.physics);
                integrate_relativistic(state, &law, &self.run)
            }
        }
    }
}

fn newtonian_start(n: &NewtonianConfig) -> (RunParameters, InitialState) {
    let state = State2::new(NVec2::new(n.x[0], n.x[1]), NVec2::new(n.v[0], n.v[1]));
    (RunParameters { steps: n.steps, dt: n.dt }, InitialState::Cartesian(state))
}
