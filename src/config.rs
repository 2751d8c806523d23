//! Run-shape configuration: how many trials, how long, and which seed.

use serde::{Deserialize, Serialize};

/// Errors from a non-positive run shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("trial count must be positive")]
    ZeroTrials,
    #[error("horizon must be positive")]
    ZeroHorizon,
}

/// Trial count, horizon length in periods, and optional seed.
///
/// A fixed seed makes the whole run bit-for-bit reproducible; without one the
/// base seed is drawn from process entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub trials: u32,
    pub horizon: u32,
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(trials: u32, horizon: u32) -> Self {
        Self { trials, horizon, seed: None }
    }

    pub fn seeded(trials: u32, horizon: u32, seed: u64) -> Self {
        Self { trials, horizon, seed: Some(seed) }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        assert_eq!(SimulationConfig::seeded(300, 12, 42).validate(), Ok(()));
    }

    #[test]
    fn zero_trials_rejected() {
        assert_eq!(
            SimulationConfig::new(0, 12).validate(),
            Err(ConfigError::ZeroTrials)
        );
    }

    #[test]
    fn zero_horizon_rejected() {
        assert_eq!(
            SimulationConfig::new(300, 0).validate(),
            Err(ConfigError::ZeroHorizon)
        );
    }
}
