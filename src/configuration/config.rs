//! Configuration types for loading the black-hole scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! three modes and the physical constants they share:
//!
//! - [`PhysicsConfig`]      – gravitational constant, central mass, speed of light
//! - [`NewtonianConfig`]    – initial state and stepping for a Newtonian mode
//! - [`RelativisticConfig`] – initial polar state and stepping for the relativistic mode
//! - [`ScenarioConfig`]     – top-level wrapper used to load everything from YAML
//!
//! # YAML format
//! Every section and field is optional; missing values fall back to the
//! built-in defaults shown here. Unknown keys are rejected:
//!
//! ```yaml
//! physics:
//!   G: 6.674e-11            # gravitational constant
//!   M: 5.0e30               # black hole mass
//!   c: 3.0e8                # speed of light
//!
//! newtonian_static:
//!   x: [ 1.0e10, 0.0 ]
//!   v: [ 0.0, 5.0e4 ]
//!   steps: 5000
//!   dt: 0.1
//!
//! newtonian_animated:
//!   x: [ 1.0e10, 0.0 ]
//!   v: [ 0.0, 6.0e4 ]
//!   steps: 2000
//!   dt: 0.05
//!
//! relativistic:
//!   r: 1.0e10
//!   v_r: 0.0
//!   v_t: 4.0e7
//!   steps: 10000
//!   dt: 0.01
//! ```
//!
//! The scenario builder maps this configuration into the runtime
//! `Physics`/`RunParameters`/state types.

use serde::Deserialize;
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, SimError};

/// Physical constants shared by every mode
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    #[serde(rename = "M")]
    pub mass: f64, // central mass
    pub c: f64, // speed of light, relativistic correction only
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            g: 6.674e-11,
            mass: 5e30,
            c: 3e8,
        }
    }
}

/// Initial Cartesian state and stepping for a Newtonian mode
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewtonianConfig {
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    pub steps: usize,
    pub dt: f64,
}

impl NewtonianConfig {
    /// Bound-looking orbit drawn as a static curve
    pub fn static_default() -> Self {
        Self {
            x: [1e10, 0.0],
            v: [0.0, 5e4],
            steps: 5000,
            dt: 0.1,
        }
    }

    /// Faster, finer-stepped run replayed as an animation
    pub fn animated_default() -> Self {
        Self {
            x: [1e10, 0.0],
            v: [0.0, 6e4],
            steps: 2000,
            dt: 0.05,
        }
    }
}

/// Initial polar state and stepping for the relativistic approximation
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RelativisticConfig {
    pub r: f64,   // initial radius
    pub v_r: f64, // initial radial velocity
    pub v_t: f64, // initial tangential velocity, only used for L = r * v_t
    pub steps: usize,
    pub dt: f64,
}

impl Default for RelativisticConfig {
    fn default() -> Self {
        Self {
            r: 1e10,
            v_r: 0.0,
            v_t: 4e7,
            steps: 10000,
            dt: 0.01,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub physics: PhysicsConfig,
    #[serde(deserialize_with = "newtonian_or_static_default")]
    pub newtonian_static: NewtonianConfig,
    #[serde(deserialize_with = "newtonian_or_animated_default")]
    pub newtonian_animated: NewtonianConfig,
    pub relativistic: RelativisticConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            newtonian_static: NewtonianConfig::static_default(),
            newtonian_animated: NewtonianConfig::animated_default(),
            relativistic: RelativisticConfig::default(),
        }
    }
}

/// Same shape as `NewtonianConfig` with every field optional, so a partial
/// section can be filled from the defaults of the mode it belongs to
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialNewtonian {
    x: Option<[f64; 2]>,
    v: Option<[f64; 2]>,
    steps: Option<usize>,
    dt: Option<f64>,
}

impl PartialNewtonian {
    fn fill(self, base: NewtonianConfig) -> NewtonianConfig {
        NewtonianConfig {
            x: self.x.unwrap_or(base.x),
            v: self.v.unwrap_or(base.v),
            steps: self.steps.unwrap_or(base.steps),
            dt: self.dt.unwrap_or(base.dt),
        }
    }
}

fn newtonian_or_static_default<'de, D>(de: D) -> std::result::Result<NewtonianConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(PartialNewtonian::deserialize(de)?.fill(NewtonianConfig::static_default()))
}

fn newtonian_or_animated_default<'de, D>(de: D) -> std::result::Result<NewtonianConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(PartialNewtonian::deserialize(de)?.fill(NewtonianConfig::animated_default()))
}

impl ScenarioConfig {
    /// Load and validate a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;

        info!("loaded scenario configuration from {}", path.display());
        Ok(cfg)
    }

    /// Parse and validate a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the integrators cannot step with
    ///
    /// Singular trajectories are allowed; only the inputs are checked.
    pub fn validate(&self) -> Result<()> {
        positive("physics.G", self.physics.g)?;
        positive("physics.M", self.physics.mass)?;
        positive("physics.c", self.physics.c)?;

        for (name, n) in [
            ("newtonian_static", &self.newtonian_static),
            ("newtonian_animated", &self.newtonian_animated),
        ] {
            check_run(name, n.steps, n.dt)?;
            if n.x.iter().chain(n.v.iter()).any(|c| !c.is_finite()) {
                return Err(SimError::invalid(name, "initial state must be finite"));
            }
            if n.x == [0.0, 0.0] {
                return Err(SimError::invalid(format!("{name}.x"), "initial position must not be the origin"));
            }
        }

        let rel = &self.relativistic;
        check_run("relativistic", rel.steps, rel.dt)?;
        if !(rel.r.is_finite() && rel.v_r.is_finite() && rel.v_t.is_finite()) {
            return Err(SimError::invalid("relativistic", "initial state must be finite"));
        }
        if rel.r == 0.0 {
            return Err(SimError::invalid("relativistic.r", "initial radius must be non-zero"));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, format!("must be finite and > 0, got {value}")))
    }
}

fn check_run(section: &str, steps: usize, dt: f64) -> Result<()> {
    if steps == 0 {
        return Err(SimError::invalid(format!("{section}.steps"), "must be at least 1"));
    }
    positive(&format!("{section}.dt"), dt)
}
