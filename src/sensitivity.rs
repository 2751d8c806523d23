//! Growth-rate sensitivity: re-run the simulation across candidate growth
//! distributions and compare terminal outcomes.

use serde::Serialize;

use crate::assumptions::AssumptionSet;
use crate::config::SimulationConfig;
use crate::distribution::Distribution;
use crate::engine::{run, EngineError};

/// Outcome of one sweep candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub growth: Distribution,
    pub mean_terminal_value: f64,
    pub probability_of_loss: f64,
}

/// Run the simulation once per candidate growth distribution, holding every
/// other assumption and the seed fixed.
///
/// # Errors
/// Propagates [`EngineError`] from any candidate run, including invalid
/// candidate parameters.
pub fn sweep_growth(
    assumptions: &AssumptionSet,
    config: &SimulationConfig,
    candidates: &[Distribution],
) -> Result<Vec<SweepPoint>, EngineError> {
    let mut points = Vec::with_capacity(candidates.len());
    for &growth in candidates {
        let varied = assumptions.with_growth(growth)?;
        let output = run(&varied, config)?;
        points.push(SweepPoint {
            growth,
            mean_terminal_value: output.summary.terminal.mean,
            probability_of_loss: output.summary.probability_of_loss,
        });
    }
    Ok(points)
}
