//! Initial-value ODE solver for the two-body state
//!
//! The adaptive path hands the equations of motion to `ivp`'s DOP853
//! integrator with `t_eval` set to the time grid. The fixed-step path is a
//! classical RK4 that checks every step against two half steps.
//! `Solver::solve` returns one state per grid sample either way.

use ivp::prelude::*;
use log::debug;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::error::{IntegrationError, IntegrationResult};
use crate::simulation::forces::EquationsOfMotion;
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::states::StateVector;

/// Counters collected during one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub nfev: usize, // derivative evaluations
    pub naccept: usize, // accepted steps
    pub nreject: usize, // rejected steps (dop853 only)
}

/// States at every grid sample plus solver counters
#[derive(Debug, Clone)]
pub struct Solution {
    pub states: Vec<StateVector>,
    pub stats: SolverStats,
}

/// One classical Runge–Kutta step of size `h` from `(t, y)`
pub fn rk4_step(
    t: f64,
    y: &StateVector,
    h: f64,
    mut derivative: impl FnMut(f64, &StateVector) -> StateVector,
) -> StateVector {
    let half_h = 0.5 * h;

    let k1 = derivative(t, y);
    let k2 = derivative(t + half_h, &(y + k1 * half_h));
    let k3 = derivative(t + half_h, &(y + k2 * half_h));
    let k4 = derivative(t + h, &(y + k3 * h));

    y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}

/// Largest component of `|a - b| / (atol + rtol * |b|)`
fn scaled_difference(a: &StateVector, b: &StateVector, atol: f64, rtol: f64) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs() / (atol + rtol * y.abs()))
        .fold(0.0, f64::max)
}

fn is_finite(y: &StateVector) -> bool {
    y.iter().all(|v| v.is_finite())
}

/// Check the grid is non-empty and strictly increasing
pub fn validate_grid(grid: &[f64]) -> IntegrationResult<()> {
    if grid.is_empty() {
        return Err(IntegrationError::EmptyGrid);
    }
    for (i, w) in grid.windows(2).enumerate() {
        // negated comparison so NaN entries are rejected too
        if !(w[1] > w[0]) {
            return Err(IntegrationError::NonIncreasingGrid {
                index: i + 1,
                prev: w[0],
                next: w[1],
            });
        }
    }
    Ok(())
}

/// Exposes an EOM with fixed constants and masses as an `ivp` system
struct TwoBodyOde<'a, E: ?Sized> {
    eom: &'a E,
    constants: &'a PhysicalConstants,
    m1: f64,
    m2: f64,
}

impl<E: EquationsOfMotion + ?Sized> ODE for TwoBodyOde<'_, E> {
    fn ode(&self, t: f64, y: &[f64], dydt: &mut [f64]) {
        let state = StateVector::from_column_slice(y);
        let d = self.eom.derivative(t, &state, self.constants, self.m1, self.m2);
        dydt.copy_from_slice(d.as_slice());
    }
}

/// Generic initial-value solver: integration method plus its parameters
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    pub method: IntegratorConfig,
    pub params: Parameters,
}

impl Solver {
    pub fn new(method: IntegratorConfig, params: Parameters) -> Self {
        Self { method, params }
    }

    /// Integrate `eom` from `y0` at `grid[0]` and return the state at every grid sample
    ///
    /// The first returned state is `y0` itself.
    pub fn solve<E: EquationsOfMotion + ?Sized>(
        &self,
        eom: &E,
        y0: &StateVector,
        grid: &[f64],
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> IntegrationResult<Solution> {
        validate_grid(grid)?;
        if !is_finite(y0) {
            return Err(IntegrationError::NonFiniteState);
        }

        if grid.len() == 1 {
            return Ok(Solution { states: vec![*y0], stats: SolverStats::default() });
        }

        let solution = match self.method {
            IntegratorConfig::Rk4 => self.solve_rk4(eom, y0, grid, constants, m1, m2)?,
            IntegratorConfig::Dop853 => self.solve_dop853(eom, y0, grid, constants, m1, m2)?,
        };

        debug!(
            "{} solve with {:?}: {} samples, nfev = {}, accepted = {}, rejected = {}",
            eom.name(),
            self.method,
            grid.len(),
            solution.stats.nfev,
            solution.stats.naccept,
            solution.stats.nreject
        );

        Ok(solution)
    }

    fn solve_dop853<E: EquationsOfMotion + ?Sized>(
        &self,
        eom: &E,
        y0: &StateVector,
        grid: &[f64],
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> IntegrationResult<Solution> {
        let system = TwoBodyOde { eom, constants, m1, m2 };

        let t0 = grid[0];
        let tf = grid[grid.len() - 1];
        let options = Options::builder()
            .method(Method::DOP853)
            .rtol(self.params.rtol)
            .atol(self.params.atol)
            .t_eval(grid.to_vec())
            .build();

        let sol = solve_ivp(&system, t0, tf, y0.as_slice(), options)
            .map_err(|err| IntegrationError::Solver(format!("{err:?}")))?;
        debug!("dop853 finished with status {:?}", sol.status);

        let mut states = Vec::with_capacity(grid.len());
        for (i, (_, y)) in sol.iter().enumerate() {
            let state = StateVector::from_column_slice(y);
            if !is_finite(&state) {
                return Err(IntegrationError::NonFiniteSolution { t: grid[i.min(grid.len() - 1)] });
            }
            states.push(state);
        }

        // the solver stops early, without an error, when it cannot continue
        if states.len() != grid.len() {
            return Err(IntegrationError::IncompleteSolution {
                expected: grid.len(),
                got: states.len(),
                status: format!("{:?}", sol.status),
            });
        }

        let stats = SolverStats {
            nfev: sol.nfev as usize,
            naccept: sol.naccpt as usize,
            nreject: sol.nrejct as usize,
        };
        Ok(Solution { states, stats })
    }

    fn solve_rk4<E: EquationsOfMotion + ?Sized>(
        &self,
        eom: &E,
        y0: &StateVector,
        grid: &[f64],
        constants: &PhysicalConstants,
        m1: f64,
        m2: f64,
    ) -> IntegrationResult<Solution> {
        let Parameters { h0, atol, rtol, max_steps } = self.params;
        if !(h0 > 0.0) {
            return Err(IntegrationError::StepSizeUnderflow { t: grid[0], h: h0 });
        }

        let mut nfev = 0;
        let mut derivative = |t: f64, y: &StateVector| {
            nfev += 1;
            eom.derivative(t, y, constants, m1, m2)
        };

        let mut stats = SolverStats::default();
        let mut states = Vec::with_capacity(grid.len());
        states.push(*y0);

        let mut y = *y0;
        for w in grid.windows(2) {
            let (t_start, t_end) = (w[0], w[1]);

            // equal sub-steps no larger than h0 that land on t_end
            let n = ((t_end - t_start) / h0).ceil().max(1.0);
            if n > max_steps as f64 {
                return Err(IntegrationError::MaxStepsExceeded { t: t_start, target: t_end, max_steps });
            }
            let n = n as usize;
            let h = (t_end - t_start) / n as f64;

            for i in 0..n {
                let t = t_start + i as f64 * h;

                // step doubling: one full step against two half steps
                let full = rk4_step(t, &y, h, &mut derivative);
                let mid = rk4_step(t, &y, 0.5 * h, &mut derivative);
                let halves = rk4_step(t + 0.5 * h, &mid, 0.5 * h, &mut derivative);

                if !is_finite(&halves) || !is_finite(&full) {
                    return Err(IntegrationError::NonFiniteSolution { t: t + h });
                }
                let error = scaled_difference(&full, &halves, atol, rtol);
                if error > 1.0 {
                    return Err(IntegrationError::ToleranceExceeded { t, h, error });
                }

                y = halves;
                stats.naccept += 1;
            }
            states.push(y);
        }

        stats.nfev = nfev;
        Ok(Solution { states, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decay(_t: f64, y: &StateVector) -> StateVector {
        -y
    }

    #[test]
    fn rk4_step_matches_exponential() {
        let mut y = StateVector::repeat(1.0);
        let h = 0.01;
        for i in 0..100 {
            y = rk4_step(i as f64 * h, &y, h, decay);
        }
        let exact = (-1.0f64).exp();
        for v in y.iter() {
            assert!((v - exact).abs() < 1e-9, "rk4 decay off: {v} vs {exact}");
        }
    }

    #[test]
    fn scaled_difference_uses_tolerances() {
        let a = StateVector::repeat(1.0 + 1e-6);
        let b = StateVector::repeat(1.0);
        assert!(scaled_difference(&a, &b, 1e-9, 1e-9) > 1.0);
        assert!(scaled_difference(&a, &b, 1e-3, 1e-3) < 1.0);
        assert_eq!(scaled_difference(&b, &b, 1e-9, 1e-9), 0.0);
    }
}
