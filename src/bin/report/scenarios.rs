// Scenario presets -- named assumption sets covering the planning cases the
// dashboard exposed as sliders.

use fincast_engine::{AssumptionSet, Distribution};

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub assumptions: AssumptionSet,
}

fn preset(
    name: &'static str,
    label: &'static str,
    base_revenue: f64,
    growth: Distribution,
    cost_ratio: Distribution,
    tax_rate: f64,
) -> Scenario {
    // Discount rate is common across presets: 8% with mild uncertainty.
    let discount_rate = Distribution::Normal { mean: 0.08, std_dev: 0.01 };
    let assumptions =
        AssumptionSet::new(base_revenue, growth, cost_ratio, discount_rate, tax_rate)
            .expect("scenario preset parameters are valid");
    Scenario { name, label, assumptions }
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        preset(
            "BASELINE",
            "Baseline (10% growth band)",
            500_000.0,
            Distribution::Uniform { low: -0.10, high: 0.10 },
            Distribution::Uniform { low: 0.35, high: 0.45 },
            0.20,
        ),
        preset(
            "HIGH_GROWTH",
            "High growth",
            500_000.0,
            Distribution::Uniform { low: 0.05, high: 0.25 },
            Distribution::Uniform { low: 0.35, high: 0.45 },
            0.20,
        ),
        preset(
            "RECESSION",
            "Recession (negative drift)",
            500_000.0,
            Distribution::Normal { mean: -0.05, std_dev: 0.04 },
            Distribution::Uniform { low: 0.40, high: 0.55 },
            0.20,
        ),
        preset(
            "VOLATILE_COSTS",
            "Volatile cost structure",
            500_000.0,
            Distribution::Uniform { low: -0.10, high: 0.10 },
            Distribution::Triangular { low: 0.30, mode: 0.40, high: 0.70 },
            0.20,
        ),
        preset(
            "THIN_MARGINS",
            "Thin margins, higher tax",
            500_000.0,
            Distribution::Uniform { low: -0.10, high: 0.10 },
            Distribution::Uniform { low: 0.50, high: 0.65 },
            0.25,
        ),
    ]
}
