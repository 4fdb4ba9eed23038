//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - physical constants and solver parameters
//! - the two bodies and the output time grid
//! - the active equations of motion

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::IntegrationResult;
use crate::simulation::forces::EquationsOfMotion;
use crate::simulation::integrator::Solver;
use crate::simulation::orbit::{linspace, orbit_init, orbit_ode};
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::states::{Body, Trajectory};

/// Runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub engine: Engine,
    pub constants: PhysicalConstants,
    pub parameters: Parameters,
    pub primary: Body,
    pub secondary: Body,
    pub time: Vec<f64>,
    pub eom: Box<dyn EquationsOfMotion + Send + Sync>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let engine = Engine::from(cfg.engine);

        let constants = PhysicalConstants {
            G: cfg.constants.G,
            c: cfg.constants.c,
        };

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            atol: p_cfg.atol,
            rtol: p_cfg.rtol,
            max_steps: p_cfg.max_steps,
        };

        let primary = Body::new(cfg.bodies.primary.mass, cfg.bodies.primary.distance);
        let secondary = Body::new(cfg.bodies.secondary.mass, cfg.bodies.secondary.distance);

        let time = linspace(cfg.time.t_start, cfg.time.t_end, cfg.time.samples);

        let eom = engine.equations_of_motion();

        Self {
            engine,
            constants,
            parameters,
            primary,
            secondary,
            time,
            eom,
        }
    }

    pub fn solver(&self) -> Solver {
        Solver::new(self.engine.integrator, self.parameters)
    }

    /// Derive initial conditions and integrate over the time grid
    pub fn run(&self) -> IntegrationResult<Trajectory> {
        let (m1, m2, ic) = orbit_init(&self.primary, &self.secondary);

        info!(
            "running {} orbit: m1 = {m1}, m2 = {m2}, d = {}, {} samples over [{}, {}]",
            self.eom.name(),
            self.secondary.distance,
            self.time.len(),
            self.time.first().copied().unwrap_or(0.0),
            self.time.last().copied().unwrap_or(0.0),
        );

        let trajectory = orbit_ode(
            self.eom.as_ref(),
            &ic,
            &self.time,
            &self.constants,
            m1,
            m2,
            &self.solver(),
        )?;

        info!("finished {} orbit with {} samples", self.eom.name(), trajectory.len());
        Ok(trajectory)
    }
}
