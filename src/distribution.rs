//! Stochastic input distributions -- a closed set of tagged variants.
//!
//! Every assumption is one of these kinds with its own parameters. Parameters
//! are checked once, when a sampler is built; the per-draw path cannot fail.

use rand::Rng;
use rand_distr::Distribution as _;
use rand_distr::{Normal, Triangular};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from out-of-domain assumption inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssumptionError {
    #[error("distribution has a non-finite parameter: {0:?}")]
    NonFiniteParameter(Distribution),
    #[error("normal std_dev must be non-negative, got {std_dev}")]
    NegativeStdDev { std_dev: f64 },
    #[error("uniform bounds must satisfy low < high, got low={low} high={high}")]
    UniformEmptyRange { low: f64, high: f64 },
    #[error(
        "triangular bounds must satisfy low <= mode <= high with low < high, \
         got low={low} mode={mode} high={high}"
    )]
    TriangularOutOfOrder { low: f64, mode: f64, high: f64 },
    #[error("base revenue must be positive and finite, got {0}")]
    BaseRevenue(f64),
    #[error("tax rate must lie in [0, 1), got {0}")]
    TaxRate(f64),
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

/// Distribution kind plus parameters for one stochastic input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    Normal { mean: f64, std_dev: f64 },
    Uniform { low: f64, high: f64 },
    Triangular { low: f64, mode: f64, high: f64 },
}

impl Distribution {
    /// Check parameter sanity without building a sampler.
    pub fn validate(&self) -> Result<(), AssumptionError> {
        self.sampler().map(|_| ())
    }

    /// Build the draw-ready sampler, rejecting out-of-domain parameters.
    pub(crate) fn sampler(&self) -> Result<Sampler, AssumptionError> {
        match *self {
            Distribution::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() {
                    return Err(AssumptionError::NonFiniteParameter(*self));
                }
                if std_dev < 0.0 {
                    return Err(AssumptionError::NegativeStdDev { std_dev });
                }
                let normal = Normal::new(mean, std_dev)
                    .map_err(|_| AssumptionError::NegativeStdDev { std_dev })?;
                Ok(Sampler::Normal(normal))
            }
            Distribution::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(AssumptionError::NonFiniteParameter(*self));
                }
                if low >= high {
                    return Err(AssumptionError::UniformEmptyRange { low, high });
                }
                Ok(Sampler::Uniform { low, high })
            }
            Distribution::Triangular { low, mode, high } => {
                if !low.is_finite() || !mode.is_finite() || !high.is_finite() {
                    return Err(AssumptionError::NonFiniteParameter(*self));
                }
                if !(low < high && low <= mode && mode <= high) {
                    return Err(AssumptionError::TriangularOutOfOrder { low, mode, high });
                }
                let triangular = Triangular::new(low, high, mode)
                    .map_err(|_| AssumptionError::TriangularOutOfOrder { low, mode, high })?;
                Ok(Sampler::Triangular(triangular))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sampler
// ---------------------------------------------------------------------------

/// Validated, draw-ready form of a [`Distribution`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Sampler {
    Normal(Normal<f64>),
    Uniform { low: f64, high: f64 },
    Triangular(Triangular<f64>),
}

impl Sampler {
    pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Normal(normal) => normal.sample(rng),
            Sampler::Uniform { low, high } => rng.gen_range(*low..*high),
            Sampler::Triangular(triangular) => triangular.sample(rng),
        }
    }
}
