//! Numerical and physical parameters for a run
//!
//! `Physics` holds the constants shared by every mode:
//! - gravitational constant `g`,
//! - central (black hole) mass `mass`,
//! - speed of light `c`, only read by the relativistic correction
//!
//! `RunParameters` holds the fixed step count and step size of one mode.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub g: f64,    // gravitational constant
    pub mass: f64, // central mass
    pub c: f64,    // speed of light
}

impl Physics {
    /// Standard gravitational parameter G*M
    pub fn gm(&self) -> f64 {
        self.g * self.mass
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            g: 6.674e-11,
            mass: 5e30, // roughly 25 solar masses
            c: 3e8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    pub steps: usize, // number of samples produced
    pub dt: f64,      // step size
}
