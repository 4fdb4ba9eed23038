//! High-level runtime engine settings
//!
//! Selects the equations of motion and the integrator used when building
//! and running a `Scenario`

use crate::configuration::config::{EngineConfig, EomConfig, IntegratorConfig};
use crate::simulation::forces::{EquationsOfMotion, Newtonian, PostNewtonian1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub eom: EomConfig, // newtonian or pn1
    pub integrator: IntegratorConfig, // rk4 or dop853
}

impl Engine {
    /// Evaluator matching `self.eom`
    pub fn equations_of_motion(&self) -> Box<dyn EquationsOfMotion + Send + Sync> {
        match self.eom {
            EomConfig::Newtonian => Box::new(Newtonian),
            EomConfig::Pn1 => Box::new(PostNewtonian1),
        }
    }
}

impl From<EngineConfig> for Engine {
    fn from(cfg: EngineConfig) -> Self {
        Self {
            eom: cfg.eom,
            integrator: cfg.integrator,
        }
    }
}
