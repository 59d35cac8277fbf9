//! Fixed-step time integrators for a particle around a fixed central mass
//!
//! Provides the semi-implicit Euler step, the Newtonian trajectory loop built
//! on it, and the relativistic-approximation loop in polar form. Every loop
//! runs exactly `RunParameters::steps` times and records one position per step.

use tracing::debug;

use super::forces::{Acceleration, RadialAcceleration};
use super::params::RunParameters;
use super::states::{NVec2, RadialState, State2, Trajectory};

/// Advance `state` by one step of semi-implicit (symplectic) Euler.
///
/// The acceleration is taken at the pre-step position, then:
/// v_n+1 = v_n + dt * a(x_n)
/// x_n+1 = x_n + dt * v_n+1
pub fn semi_implicit_euler_step<A: Acceleration + ?Sized>(state: &mut State2, accel: &A, dt: f64) {
    let a = accel.acceleration(&state.x);
    state.v += a * dt;
    state.x += state.v * dt;
}

/// Integrate `steps` semi-implicit Euler steps from `initial`, recording the
/// position after each step.
///
/// No collision or singularity check: a path through the origin yields
/// non-finite samples.
pub fn integrate_newtonian<A: Acceleration + ?Sized>(initial: State2, accel: &A, run: &RunParameters) -> Trajectory {
    debug!(steps = run.steps, dt = run.dt, x0 = ?initial.x, v0 = ?initial.v, "newtonian integration");

    let mut state = initial;
    let mut positions = Vec::with_capacity(run.steps);

    for _ in 0..run.steps {
        semi_implicit_euler_step(&mut state, accel, run.dt);
        positions.push(state.x);
    }

    Trajectory::from_points(positions)
}

/// Step-by-step driver for the relativistic approximation
///
/// Only `r` and `v_r` are integrated. The angle is derived analytically at
/// step `i` as `theta * i`, where `theta = L * dt / r^2` uses the updated
/// radius of that same step.
pub struct RelativisticOrbit<'a, A: RadialAcceleration + ?Sized> {
    state: RadialState,
    accel: &'a A,
    dt: f64,
    step: usize,
}

impl<'a, A: RadialAcceleration + ?Sized> RelativisticOrbit<'a, A> {
    pub fn new(initial: RadialState, accel: &'a A, dt: f64) -> Self {
        Self {
            state: initial,
            accel,
            dt,
            step: 0,
        }
    }

    /// Advance one step and return the Cartesian position for it
    pub fn step(&mut self) -> NVec2 {
        let dt = self.dt;
        let l = self.state.angular_momentum();

        let a_r = self.accel.radial_acceleration(self.state.r, l);
        self.state.v_r += a_r * dt;
        self.state.r += self.state.v_r * dt;

        // per-step angle from the updated radius, scaled by the step index
        let theta = l * dt / self.state.r.powi(2);
        let angle = theta * self.step as f64;
        self.step += 1;

        NVec2::new(self.state.r * angle.cos(), self.state.r * angle.sin())
    }

    pub fn state(&self) -> &RadialState {
        &self.state
    }

    /// Number of steps taken so far
    pub fn steps_taken(&self) -> usize {
        self.step
    }
}

/// Integrate the relativistic approximation for `run.steps` steps
pub fn integrate_relativistic<A: RadialAcceleration + ?Sized>(initial: RadialState, accel: &A, run: &RunParameters) -> Trajectory {
    debug!(
        steps = run.steps,
        dt = run.dt,
        r0 = initial.r,
        v_r0 = initial.v_r,
        l = initial.angular_momentum(),
        "relativistic integration"
    );

    let mut orbit = RelativisticOrbit::new(initial, accel, run.dt);
    (0..run.steps).map(|_| orbit.step()).collect()
}
