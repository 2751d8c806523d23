// fincast-engine: Monte Carlo financial simulation engine.
// Stochastic revenue/cost/discount assumptions in, outcome distributions out.

pub mod assumptions;
pub mod config;
pub mod distribution;
pub mod engine;
pub mod sensitivity;
mod summary;
pub mod types;

pub use assumptions::AssumptionSet;
pub use config::{ConfigError, SimulationConfig};
pub use distribution::{AssumptionError, Distribution};
pub use engine::{run, EngineError};
pub use sensitivity::{sweep_growth, SweepPoint};
pub use types::*;
