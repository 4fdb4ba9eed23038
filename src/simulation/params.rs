//! Numerical and physical parameters for the simulation
//!
//! `PhysicalConstants` holds `G` and `c` (geometrized units by default).
//! `Parameters` holds solver settings:
//! - fixed rk4 step size and its step budget per output interval,
//! - error tolerances (dop853 step control, rk4 step-doubling check)

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { G: 1.0, c: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub h0: f64, // rk4 step size
    pub atol: f64, // absolute error tolerance
    pub rtol: f64, // relative error tolerance
    pub max_steps: usize, // rk4 step budget between two grid samples
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: 1.0,
            atol: 1.0e-9,
            rtol: 1.0e-9,
            max_steps: 100_000,
        }
    }
}
