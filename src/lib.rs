pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, StateVector, Trajectory, TwoBodyState, NVec3, initial_position};
pub use simulation::params::{Parameters, PhysicalConstants};
pub use simulation::forces::{EquationsOfMotion, Newtonian, PostNewtonian1};
pub use simulation::integrator::{Solver, Solution, SolverStats, rk4_step};
pub use simulation::orbit::{orbit_init, orbit_ode, linspace};
pub use simulation::diagnostics::{separation, specific_energy, specific_angular_momentum, kepler_period};
pub use simulation::error::{IntegrationError, ConfigError};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EomConfig, EngineConfig, ConstantsConfig, ParametersConfig, BodyConfig, BodiesConfig, TimeConfig, ScenarioConfig};
