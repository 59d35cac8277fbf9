//! Acceleration laws for a test particle around a fixed central mass
//!
//! Defines the Cartesian `Acceleration` trait with the Newtonian
//! inverse-square law, and the `RadialAcceleration` trait with the
//! precession-corrected radial law used by the relativistic approximation.

use crate::simulation::params::Physics;
use crate::simulation::states::NVec2;

/// Trait for 2D acceleration sources that depend only on position
pub trait Acceleration {
    fn acceleration(&self, x: &NVec2) -> NVec2;
}

/// Trait for radial acceleration laws in polar form
/// `l` is the conserved angular momentum per unit mass
pub trait RadialAcceleration {
    fn radial_acceleration(&self, r: f64, l: f64) -> f64;
}

/// Newtonian gravity of a point mass fixed at the origin
///
/// No softening: the law is singular at r = 0 and a trajectory through the
/// origin produces non-finite values.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianCentral {
    pub g: f64,    // gravitational constant
    pub mass: f64, // central mass
}

impl NewtonianCentral {
    pub fn from_physics(physics: &Physics) -> Self {
        Self {
            g: physics.g,
            mass: physics.mass,
        }
    }
}

impl Acceleration for NewtonianCentral {
    fn acceleration(&self, x: &NVec2) -> NVec2 {
        // |r|
        let r_mag = x.norm();

        // a = -G * M * r / |r|^3  (points back toward the origin)
        x * (-self.g * self.mass) / r_mag.powf(3.0)
    }
}

/// Newtonian + centrifugal + perihelion-precession radial law
///
/// a_r = -G*M/r^2 + L^2/r^3 - 3*G*M*L^2/(c^2*r^4)
///
/// Evaluated left to right with `powf`, in exactly the operand order written
/// above, so the produced curve is reproducible bit for bit.
#[derive(Debug, Clone, Copy)]
pub struct PrecessionCorrected {
    pub g: f64,    // gravitational constant
    pub mass: f64, // central mass
    pub c: f64,    // speed of light
}

impl PrecessionCorrected {
    pub fn from_physics(physics: &Physics) -> Self {
        Self {
            g: physics.g,
            mass: physics.mass,
            c: physics.c,
        }
    }
}

impl RadialAcceleration for PrecessionCorrected {
    fn radial_acceleration(&self, r: f64, l: f64) -> f64 {
        let (g, m, c) = (self.g, self.mass, self.c);

        let newtonian = -g * m / r.powf(2.0);
        let centrifugal = l.powf(2.0) / r.powf(3.0);
        let precession = 3.0 * g * m * l.powf(2.0) / (c.powf(2.0) * r.powf(4.0));

        newtonian + centrifugal - precession
    }
}
