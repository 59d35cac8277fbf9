//! Core state types for the black-hole orbit integrators.
//!
//! Defines:
//! - `State2`      position/velocity pair advanced by the Newtonian loop
//! - `RadialState` radius, radial velocity and the conserved angular momentum
//! - `Trajectory`  the ordered, read-only sequence of sampled positions
//!
//! All vectors are 2D `NVec2` (nalgebra), in meters and meters/second.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State2 {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl State2 {
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self { x, v }
    }

    /// Distance from the central mass at the origin
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }
}

/// Polar state used by the relativistic approximation
///
/// `l` is fixed at construction from `r0 * v_t0` and has no setter;
/// only `r` and `v_r` evolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialState {
    pub r: f64,   // radius
    pub v_r: f64, // radial velocity
    l: f64,       // angular momentum per unit mass
}

impl RadialState {
    /// Build from initial radius, radial velocity and tangential velocity.
    /// The tangential velocity is only used to derive `L = r0 * v_t0`.
    pub fn new(r0: f64, v_r0: f64, v_t0: f64) -> Self {
        Self {
            r: r0,
            v_r: v_r0,
            l: r0 * v_t0,
        }
    }

    pub fn angular_momentum(&self) -> f64 {
        self.l
    }
}

/// Axis-aligned extent of a trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: NVec2,
    pub max: NVec2,
}

impl Bounds {
    /// Largest absolute coordinate on either axis
    pub fn half_extent(&self) -> f64 {
        self.min
            .iter()
            .chain(self.max.iter())
            .fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }
}

/// Ordered position samples, one per integration step.
///
/// Built once by an integrator and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<NVec2>,
}

impl Trajectory {
    pub fn from_points(points: Vec<NVec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&NVec2> {
        self.points.get(i)
    }

    pub fn first(&self) -> Option<&NVec2> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.last()
    }

    pub fn points(&self) -> &[NVec2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NVec2> {
        self.points.iter()
    }

    /// True if any sample has a NaN or infinite coordinate
    pub fn has_non_finite(&self) -> bool {
        self.points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite()))
    }

    /// (min, max) of |x| over the finite samples
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        self.finite_points().map(|p| p.norm()).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }

    /// Extent of the finite samples, `None` if there are none
    pub fn bounds(&self) -> Option<Bounds> {
        let mut finite = self.finite_points();
        let first = *finite.next()?;
        let (min, max) = finite.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Bounds { min, max })
    }

    fn finite_points(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite())
    }
}

impl FromIterator<NVec2> for Trajectory {
    fn from_iter<I: IntoIterator<Item = NVec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a NVec2;
    type IntoIter = std::slice::Iter<'a, NVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
