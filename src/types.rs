//! Output data model: trials, percentile bands, and summary statistics.

use serde::{Deserialize, Serialize};

// ─── TrialResult ─────────────────────────────────────────────────────────────

/// One independent realization of the financial model over the full horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Discounted after-tax profit per period; length equals the horizon.
    pub values: Vec<f64>,
}

impl TrialResult {
    /// Net present value of the trial: the sum of its discounted profits.
    pub fn terminal_value(&self) -> f64 {
        self.values.iter().sum()
    }
}

// ─── PercentileBand ──────────────────────────────────────────────────────────

/// Per-period cross-sectional percentiles of the trial ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    pub p05: Vec<f64>,
    pub p50: Vec<f64>,
    pub p95: Vec<f64>,
}

// ─── Stats ───────────────────────────────────────────────────────────────────

/// Sample statistics with a normal-approximation 95% confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                ci_lower: 0.0,
                ci_upper: 0.0,
                min: 0.0,
                max: 0.0,
                n: 0,
            };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── SummaryStats ────────────────────────────────────────────────────────────

/// Derived statistics over the whole ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean discounted profit per period.
    pub mean: Vec<f64>,
    /// 5th/50th/95th percentile curves per period.
    pub band: PercentileBand,
    /// Fraction of trials whose terminal value is negative.
    pub probability_of_loss: f64,
    /// Distribution of per-trial terminal values (net present value).
    pub terminal: Stats,
}

// ─── SimulationOutput ────────────────────────────────────────────────────────

/// Complete result of one engine invocation, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub trials: Vec<TrialResult>,
    pub summary: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_known_samples() {
        let stats = Stats::from_samples(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(stats.mean, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.n, 5);
        // Sample std dev of 10..50 step 10 is sqrt(250)
        assert!((stats.std_dev - 250.0_f64.sqrt()).abs() < 1e-12);
        assert!(stats.ci_lower < stats.mean && stats.mean < stats.ci_upper);
    }

    #[test]
    fn stats_from_single_sample_has_zero_spread() {
        let stats = Stats::from_samples(&[7.5]);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.ci_lower, 7.5);
        assert_eq!(stats.ci_upper, 7.5);
    }

    #[test]
    fn stats_from_empty_samples() {
        let stats = Stats::from_samples(&[]);
        assert_eq!(stats.n, 0);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn terminal_value_sums_periods() {
        let trial = TrialResult { values: vec![100.0, -40.0, 25.0] };
        assert_eq!(trial.terminal_value(), 85.0);
    }
}
