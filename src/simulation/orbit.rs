//! Initial conditions, time grids and the trajectory driver
//!
//! `orbit_init` places body 2 on the y-axis with circular speed for the
//! combined mass, `orbit_ode` runs the solver and keeps body 2's position.

use crate::simulation::error::IntegrationResult;
use crate::simulation::forces::EquationsOfMotion;
use crate::simulation::integrator::Solver;
use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::{initial_position, Body, NVec3, StateVector, Trajectory, TwoBodyState};

/// Masses and initial state for a `(primary, secondary)` pair
///
/// Returns `(m1, m2, state)` with the primary at rest at the origin and the
/// secondary at `(0, d, 0)` moving along +x at `sqrt((m1 + m2) / d)`.
/// `secondary.distance` must be positive; zero gives an infinite speed.
pub fn orbit_init(primary: &Body, secondary: &Body) -> (f64, f64, StateVector) {
    let m1 = primary.mass;
    let m2 = secondary.mass;
    let mtot = m1 + m2;

    let r1 = NVec3::zeros();
    let v1 = NVec3::zeros();
    let r2 = initial_position(secondary);
    let v2 = NVec3::new((mtot / secondary.distance).sqrt(), 0.0, 0.0);

    (m1, m2, StateVector::compose(r1, r2, v1, v2))
}

/// `samples` evenly spaced times from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = end;
            grid
        }
    }
}

/// Integrate `eom` over `grid` and return body 2's position at every sample
///
/// Solver failures are returned unchanged.
pub fn orbit_ode<E: EquationsOfMotion + ?Sized>(
    eom: &E,
    initial_state: &StateVector,
    grid: &[f64],
    constants: &PhysicalConstants,
    m1: f64,
    m2: f64,
    solver: &Solver,
) -> IntegrationResult<Trajectory> {
    let solution = solver.solve(eom, initial_state, grid, constants, m1, m2)?;

    let mut trajectory = Trajectory::with_capacity(grid.len());
    for (t, state) in grid.iter().zip(solution.states.iter()) {
        trajectory.push(*t, state.r2());
    }
    Ok(trajectory)
}
