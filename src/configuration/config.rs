//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! binary orbit scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – equations of motion and integrator
//! - [`ConstantsConfig`]  – physical constants (`G`, `c`)
//! - [`ParametersConfig`] – solver step size, tolerances and step budget
//! - [`BodiesConfig`]     – the primary and secondary black holes
//! - [`TimeConfig`]       – the output time grid
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "dop853"    # or "rk4"
//!   eom: "pn1"              # or "newtonian"
//!
//! constants:                # optional, geometrized units by default
//!   G: 1.0
//!   c: 1.0
//!
//! parameters:               # optional
//!   h0: 1.0                 # rk4 step size
//!   atol: 1.0e-9
//!   rtol: 1.0e-9
//!   max_steps: 100000       # rk4 steps per output interval
//!
//! bodies:
//!   primary:   { mass: 10.0, distance: 0.0 }
//!   secondary: { mass: 1.0,  distance: 1000.0 }
//!
//! time:
//!   t_start: 0.0
//!   t_end: 1000000.0
//!   samples: 5000
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::error::ConfigError;
use crate::simulation::params::{Parameters, PhysicalConstants};

/// Which integrator the solver uses
/// `integrator: "rk4"` or `integrator: "dop853"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, fixed step h0
    Rk4,

    #[default]
    #[serde(rename = "dop853")] // Dormand–Prince 8(5,3) from ivp, adaptive step with atol/rtol
    Dop853,
}

/// Which equations of motion drive the orbit
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EomConfig {
    #[serde(rename = "newtonian")]
    Newtonian,

    #[default]
    #[serde(rename = "pn1")] // Newtonian plus first post-Newtonian correction
    Pn1,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub eom: EomConfig,
}

#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct ConstantsConfig {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        let p = PhysicalConstants::default();
        Self { G: p.G, c: p.c }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct ParametersConfig {
    pub h0: f64,
    pub atol: f64,
    pub rtol: f64,
    pub max_steps: usize,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            h0: p.h0,
            atol: p.atol,
            rtol: p.rtol,
            max_steps: p.max_steps,
        }
    }
}

/// One black hole: mass and initial distance from the other hole
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BodyConfig {
    pub mass: f64,
    #[serde(default)]
    pub distance: f64,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BodiesConfig {
    pub primary: BodyConfig, // heavier hole, frame origin
    pub secondary: BodyConfig, // orbiting hole
}

/// Output time grid: `samples` evenly spaced times in `[t_start, t_end]`
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct TimeConfig {
    #[serde(default)]
    pub t_start: f64,
    pub t_end: f64,
    pub samples: usize,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub constants: ConstantsConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: BodiesConfig,
    pub time: TimeConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Reject values the solver cannot work with
    ///
    /// The secondary's distance is not checked here: a zero distance is a
    /// physical degeneracy reported by the solver itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.time.samples == 0 {
            return invalid("time.samples must be at least 1".into());
        }
        if self.time.samples > 1 && !(self.time.t_end > self.time.t_start) {
            return invalid(format!(
                "time.t_end ({}) must be greater than time.t_start ({})",
                self.time.t_end, self.time.t_start
            ));
        }
        if !(self.bodies.primary.mass > 0.0) || !(self.bodies.secondary.mass > 0.0) {
            return invalid("body masses must be positive".into());
        }
        if !(self.constants.G > 0.0) || !(self.constants.c > 0.0) {
            return invalid("constants G and c must be positive".into());
        }
        let p = &self.parameters;
        if !(p.h0 > 0.0) || !(p.atol > 0.0) || !(p.rtol > 0.0) {
            return invalid("parameters h0, atol and rtol must be positive".into());
        }
        if p.max_steps == 0 {
            return invalid("parameters.max_steps must be at least 1".into());
        }
        Ok(())
    }
}
