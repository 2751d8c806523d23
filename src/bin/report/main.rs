// Scenario Report Runner -- Monte Carlo outcome distributions per scenario
//
// Usage:
//   cargo run --release --bin report                  # All scenarios
//   cargo run --release --bin report -- --trials 5000 # More trials
//   cargo run --release --bin report -- RECESSION     # Filter by name
//   cargo run --release --bin report -- --json        # Write JSON report
//   cargo run --release --bin report -- --seed 42     # Custom seed

mod scenarios;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use fincast_engine::{run, sweep_growth, AssumptionSet, Distribution, SimulationConfig, SummaryStats};
use scenarios::{scenarios, Scenario};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    trials: u32,
    horizon: u32,
    seed: u64,
    json: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        trials: 300,
        horizon: 12,
        seed: 0,
        json: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    cli.trials = args[i].parse().unwrap_or(300);
                }
            }
            "--horizon" => {
                i += 1;
                if i < args.len() {
                    cli.horizon = args[i].parse().unwrap_or(12);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--json" => {
                cli.json = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Report Types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ScenarioReport {
    name: String,
    label: String,
    assumptions: AssumptionSet,
    summary: SummaryStats,
    elapsed_ms: u128,
}

#[derive(Serialize)]
struct ReportFile {
    timestamp: String,
    version: &'static str,
    prng: &'static str,
    trials: u32,
    horizon: u32,
    seed: u64,
    scenarios: Vec<ScenarioReport>,
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&f_lower)
                        || s.label.to_lowercase().contains(&f_lower)
                })
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    let config = SimulationConfig::seeded(cli.trials, cli.horizon, cli.seed);

    println!("\n  Scenario Report Runner");
    println!(
        "  PRNG: ChaCha8Rng | Trials: {} | Horizon: {} | Seed: {}",
        cli.trials, cli.horizon, cli.seed
    );
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!(
        "  {:<30} {:>14} {:>12} {:>8} {:>14} {:>14} {:>7}",
        "Scenario", "Mean NPV", "±CI", "P(loss)", "Min NPV", "Max NPV", "Time"
    );
    println!("  {}", "-".repeat(104));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for scenario in &to_run {
        let start = Instant::now();
        let output = match run(&scenario.assumptions, &config) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("  {} failed: {}", scenario.name, e);
                std::process::exit(1);
            }
        };
        let elapsed_ms = start.elapsed().as_millis();

        let terminal = &output.summary.terminal;
        let half_ci = (terminal.ci_upper - terminal.ci_lower) / 2.0;
        println!(
            "  {:<30} {:>14.0} {:>12.0} {:>7.1}% {:>14.0} {:>14.0} {:>5}ms",
            scenario.label,
            terminal.mean,
            half_ci,
            output.summary.probability_of_loss * 100.0,
            terminal.min,
            terminal.max,
            elapsed_ms,
        );

        reports.push(ScenarioReport {
            name: scenario.name.to_string(),
            label: scenario.label.to_string(),
            assumptions: scenario.assumptions.clone(),
            summary: output.summary,
            elapsed_ms,
        });
    }

    println!("  {}", "-".repeat(104));
    println!(
        "  {} scenario(s) in {:.1}s\n",
        reports.len(),
        suite_start.elapsed().as_secs_f64()
    );

    // ─── Growth Sensitivity (first scenario) ────────────────────────────

    let baseline = to_run[0];
    let candidates: Vec<Distribution> = (0..5)
        .map(|i| Distribution::Normal { mean: 0.05 + 0.05 * i as f64, std_dev: 0.02 })
        .collect();
    match sweep_growth(&baseline.assumptions, &config, &candidates) {
        Ok(points) => {
            println!("  Growth sensitivity ({}):", baseline.label);
            for point in &points {
                if let Distribution::Normal { mean, .. } = point.growth {
                    println!(
                        "    growth {:>5.1}%  ->  mean NPV {:>12.0}   P(loss) {:>5.1}%",
                        mean * 100.0,
                        point.mean_terminal_value,
                        point.probability_of_loss * 100.0,
                    );
                }
            }
            println!();
        }
        Err(e) => eprintln!("  Growth sensitivity failed: {}", e),
    }

    // ─── Write JSON Report ──────────────────────────────────────────────

    if cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before epoch")
            .as_millis();
        let timestamp = format!("{}", ts);

        let report = ReportFile {
            timestamp: timestamp.clone(),
            version: env!("CARGO_PKG_VERSION"),
            prng: "ChaCha8Rng",
            trials: cli.trials,
            horizon: cli.horizon,
            seed: cli.seed,
            scenarios: reports,
        };

        let dir = std::path::Path::new("report-results");
        if !dir.exists() {
            std::fs::create_dir_all(dir).expect("Failed to create report-results/");
        }
        let path = dir.join(format!("report-{}.json", timestamp));
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize");
        std::fs::write(&path, &json).expect("Failed to write report file");
        println!("  Results saved to: {}\n", path.display());
    }
}
