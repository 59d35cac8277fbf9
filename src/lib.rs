pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod menu;
pub mod error;

pub use simulation::states::{State2, RadialState, Trajectory, Bounds, NVec2};
pub use simulation::params::{Physics, RunParameters};
pub use simulation::forces::{Acceleration, RadialAcceleration, NewtonianCentral, PrecessionCorrected};
pub use simulation::integrator::{semi_implicit_euler_step, integrate_newtonian, integrate_relativistic, RelativisticOrbit};
pub use simulation::scenario::{Mode, Scenario, InitialState};
pub use simulation::engine::{Engine, Renderer, SummaryRenderer, TrajectorySummary};

pub use configuration::config::{ScenarioConfig, PhysicsConfig, NewtonianConfig, RelativisticConfig};

pub use visualization::{bhgrav_vis2d::run_2d, launcher::WindowRenderer};

pub use benchmark::benchmark::{bench_integrators, time_integrators};

pub use menu::{run_menu, ModeRunner, MenuExit};
pub use error::{SimError, Result};
