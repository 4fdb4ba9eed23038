//! Equations of motion for the two-body problem
//!
//! Defines the `EquationsOfMotion` trait plus the Newtonian and first
//! post-Newtonian (PN1) evaluators. Both work in the rest frame of body 1
//! and map a 12-element state to its time derivative.

use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::{NVec3, StateVector, TwoBodyState};

/// Trait for right-hand sides `dy/dt = f(t, y)` of the two-body state
/// Implementations are pure: the output depends only on the arguments
pub trait EquationsOfMotion {
    fn derivative(
        &self,
        t: f64,
        state: &StateVector,
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> StateVector;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Newtonian inverse-square attraction of body 2 toward body 1
///
/// Only body 1's mass enters the acceleration. Body 1's velocity derivative
/// is zero, while its position derivative is the live `v1` from the state,
/// so a zero `v1` keeps body 1 at rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Newtonian;

impl EquationsOfMotion for Newtonian {
    fn derivative(
        &self,
        _t: f64,
        state: &StateVector,
        constants: &PhysicalConstants,
        m1: f64,
        _m2: f64,
    ) -> StateVector {
        // separation of body 2 from body 1
        let r_vec = state.r2() - state.r1();
        let r_mag = r_vec.norm();

        // velocity of body 2 relative to body 1
        let vel = state.v2() - state.v1();

        // a = -G m1 r / |r|^3
        let a = -(constants.G * m1) * r_vec / (r_mag * r_mag * r_mag);

        StateVector::compose(state.v1(), vel, NVec3::zeros(), a)
    }

    fn name(&self) -> &'static str {
        "newtonian"
    }
}

/// Newtonian attraction from the total mass plus the PN1 correction term
///
/// Undefined when the separation or the relative speed is zero, since both
/// are normalized into unit vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostNewtonian1;

impl PostNewtonian1 {
    /// Relative acceleration of body 2 for separation `r_vec` and relative velocity `v_vec`
    pub fn acceleration(
        r_vec: &NVec3,
        v_vec: &NVec3,
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> NVec3 {
        let (r_vec, v_vec) = (*r_vec, *v_vec);
        let g = constants.G;
        let c2 = constants.c * constants.c;

        // total mass and symmetric mass ratio
        let mtot = m1 + m2;
        let eta = (m1 * m2) / (mtot * mtot);

        let r_mag = r_vec.norm();
        let n_hat = r_vec / r_mag;

        let v_mag = v_vec.norm();
        let v_hat = v_vec / v_mag;

        let n_dot_v = n_hat.dot(&v_hat);

        let pn1 = (4.0 + 2.0 * eta) * (g * mtot / r_mag) * n_hat
            - (1.0 + 3.0 * eta) * v_mag * v_mag * n_hat
            + 1.5 * eta * n_dot_v * n_dot_v * n_hat
            + (4.0 - 2.0 * eta) * n_dot_v * v_vec;

        (g * mtot / (r_mag * r_mag)) * (-n_hat + pn1 / c2)
    }
}

impl EquationsOfMotion for PostNewtonian1 {
    fn derivative(
        &self,
        _t: f64,
        state: &StateVector,
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> StateVector {
        let r_vec = state.r2() - state.r1();
        let v_vec = state.v2() - state.v1();

        let dvdt = Self::acceleration(&r_vec, &v_vec, constants, m1, m2);

        // body 2 moves with the relative velocity; equal to v2 while v1 == 0
        StateVector::compose(state.v1(), v_vec, NVec3::zeros(), dvdt)
    }

    fn name(&self) -> &'static str {
        "pn1"
    }
}
