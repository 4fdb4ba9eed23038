//! Conserved quantities of the relative orbit
//!
//! Used to check solver accuracy. Both are constants of motion for the
//! `Newtonian` evaluator, where the central mass is `m1` alone.

use std::f64::consts::PI;

use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::{NVec3, StateVector, TwoBodyState};

/// |r2 - r1|
pub fn separation(state: &StateVector) -> f64 {
    (state.r2() - state.r1()).norm()
}

/// Specific orbital energy v^2 / 2 - G m1 / r of the relative motion
pub fn specific_energy(state: &StateVector, constants: &PhysicalConstants, m1: f64) -> f64 {
    let v = state.v2() - state.v1();
    0.5 * v.norm_squared() - constants.G * m1 / separation(state)
}

/// Specific angular momentum r x v of the relative motion
pub fn specific_angular_momentum(state: &StateVector) -> NVec3 {
    let r = state.r2() - state.r1();
    let v = state.v2() - state.v1();
    r.cross(&v)
}

/// Period of the bound Newtonian orbit through `state`, `None` if unbound
pub fn kepler_period(state: &StateVector, constants: &PhysicalConstants, m1: f64) -> Option<f64> {
    let mu = constants.G * m1;
    let energy = specific_energy(state, constants, m1);
    if !(energy < 0.0) {
        return None;
    }

    // vis-viva: a = -mu / (2 E)
    let a = -mu / (2.0 * energy);
    Some(2.0 * PI * (a * a * a / mu).sqrt())
}
