//! Ensemble aggregation: percentile curves, terminal-value statistics, and
//! probability of loss.

use crate::types::{PercentileBand, Stats, SummaryStats, TrialResult};

/// Aggregate a non-empty trial ensemble into summary statistics.
///
/// Each trial must have exactly `horizon` values; the engine guarantees both
/// before calling in.
pub(crate) fn summarize(trials: &[TrialResult], horizon: usize) -> SummaryStats {
    let n = trials.len();

    let mut mean = Vec::with_capacity(horizon);
    let mut p05 = Vec::with_capacity(horizon);
    let mut p50 = Vec::with_capacity(horizon);
    let mut p95 = Vec::with_capacity(horizon);

    let mut cross_section = Vec::with_capacity(n);
    for period in 0..horizon {
        cross_section.clear();
        cross_section.extend(trials.iter().map(|t| t.values[period]));

        mean.push(cross_section.iter().sum::<f64>() / n as f64);

        cross_section.sort_by(f64::total_cmp);
        p05.push(percentile(&cross_section, 0.05));
        p50.push(percentile(&cross_section, 0.50));
        p95.push(percentile(&cross_section, 0.95));
    }

    let terminal_values: Vec<f64> = trials.iter().map(TrialResult::terminal_value).collect();
    let losses = terminal_values.iter().filter(|&&v| v < 0.0).count();

    SummaryStats {
        mean,
        band: PercentileBand { p05, p50, p95 },
        probability_of_loss: losses as f64 / n as f64,
        terminal: Stats::from_samples(&terminal_values),
    }
}

/// Nearest-rank percentile of a sorted slice.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(values: Vec<f64>) -> TrialResult {
        TrialResult { values }
    }

    #[test]
    fn percentile_nearest_rank() {
        let sorted: Vec<f64> = (0..100).map(|i| i as f64 * 100.0).collect();
        let p95 = percentile(&sorted, 0.95);
        assert!((9000.0..=9600.0).contains(&p95), "p95 = {}", p95);
        assert_eq!(percentile(&sorted, 0.0), 0.0);
        assert_eq!(percentile(&sorted, 1.0), 9900.0);
    }

    #[test]
    fn percentile_of_single_value_is_that_value() {
        assert_eq!(percentile(&[42.0], 0.05), 42.0);
        assert_eq!(percentile(&[42.0], 0.50), 42.0);
        assert_eq!(percentile(&[42.0], 0.95), 42.0);
    }

    #[test]
    fn band_is_ordered_per_period() {
        let trials: Vec<TrialResult> = (0..50)
            .map(|i| trial(vec![i as f64, 100.0 - i as f64, (i * i) as f64]))
            .collect();
        let summary = summarize(&trials, 3);
        for period in 0..3 {
            assert!(
                summary.band.p05[period] <= summary.band.p50[period]
                    && summary.band.p50[period] <= summary.band.p95[period],
                "percentile ordering broken at period {}",
                period
            );
        }
    }

    #[test]
    fn single_trial_band_is_degenerate() {
        let trials = vec![trial(vec![10.0, 20.0, 30.0])];
        let summary = summarize(&trials, 3);
        assert_eq!(summary.band.p05, vec![10.0, 20.0, 30.0]);
        assert_eq!(summary.band.p50, vec![10.0, 20.0, 30.0]);
        assert_eq!(summary.band.p95, vec![10.0, 20.0, 30.0]);
        assert_eq!(summary.mean, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn probability_of_loss_counts_negative_terminals() {
        let trials = vec![
            trial(vec![100.0, 50.0]),   // NPV 150
            trial(vec![-80.0, -10.0]),  // NPV -90
            trial(vec![-5.0, 5.0]),     // NPV 0, not a loss
            trial(vec![10.0, -30.0]),   // NPV -20
        ];
        let summary = summarize(&trials, 2);
        assert_eq!(summary.probability_of_loss, 0.5);
        assert_eq!(summary.terminal.n, 4);
    }
}
