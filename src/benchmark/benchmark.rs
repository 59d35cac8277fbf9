use std::hint::black_box;
use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::scenario::{Mode, Scenario};

/// Timing of one mode's full integration loop
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub mode: Mode,
    pub steps: usize,
    pub ms_per_run: f64,
    pub ns_per_step: f64,
}

/// Time each mode's integration loop for `repeats` runs after one warm-up
pub fn time_integrators(cfg: &ScenarioConfig, repeats: usize) -> Vec<BenchResult> {
    let repeats = repeats.max(1);

    Mode::ALL
        .into_iter()
        .map(|mode| {
            let scenario = Scenario::build_scenario(cfg, mode);

            // Warm-up
            black_box(scenario.integrate());

            let t0 = Instant::now();
            for _ in 0..repeats {
                black_box(scenario.integrate());
            }
            let elapsed = t0.elapsed().as_secs_f64();

            let per_run = elapsed / repeats as f64;
            BenchResult {
                mode,
                steps: scenario.run.steps,
                ms_per_run: per_run * 1000.0,
                ns_per_step: per_run * 1e9 / scenario.run.steps.max(1) as f64,
            }
        })
        .collect()
}

/// Benchmark the three integration loops
/// Paste output directly into a spreadsheet to compare
pub fn bench_integrators(cfg: &ScenarioConfig) {
    println!("mode,steps,ms_per_run,ns_per_step");
    for r in time_integrators(cfg, 20) {
        println!("{},{},{:.6},{:.2}", r.mode, r.steps, r.ms_per_run, r.ns_per_step);
    }
}
