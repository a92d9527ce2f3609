use std::time::Instant;

use crate::configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};
use crate::simulation::input::FrameInput;
use crate::simulation::scenario::Scenario;

/// Scenario used by all benchmarks: default solar system, impactor live.
fn bench_scenario() -> Scenario {
    let cfg = ScenarioConfig {
        engine: EngineConfig { view_mode: 3 },
        parameters: ParametersConfig {
            simulation_speed: 0.01,
            start_day: 17.62,
            seed: 42,
            move_speed: 10.0,
            turn_rate: 1.0,
        },
    };
    Scenario::build_scenario(cfg)
}

/// Frame input resembling a steady 120 fps run with the cursor at center.
fn bench_input() -> FrameInput {
    FrameInput {
        delta_seconds: 1.0 / 120.0,
        cursor_x: 640.0,
        cursor_y: 360.0,
        viewport_width: 1280.0,
        viewport_height: 720.0,
        ..Default::default()
    }
}

/// Time whole-frame steps for a few frame counts.
pub fn bench_step() {
    let frame_counts = [1_000, 10_000, 100_000];

    for frames in frame_counts {
        let mut scenario = bench_scenario();
        let input = bench_input();

        // keep the impactor in flight so collision tests are exercised
        let mut spawn = input.clone();
        spawn.spawn_impactor = true;
        scenario.step(&spawn);

        // Warm up
        scenario.step(&input);

        let t0 = Instant::now();
        for _ in 0..frames {
            scenario.step(&input);
        }
        let per_step_us = t0.elapsed().as_secs_f64() * 1e6 / frames as f64;

        println!("frames = {frames:7}, step = {per_step_us:8.3} us");
    }
}

/// Per-step cost across view modes.
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("mode,step_us");

    for mode in 0u8..=4 {
        let mut scenario = bench_scenario();
        let mut input = bench_input();
        input.select_mode = Some(mode);
        scenario.step(&input);
        input.select_mode = None;

        let steps = 50_000;
        let t0 = Instant::now();
        for _ in 0..steps {
            scenario.step(&input);
        }
        let per_step_us = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

        println!("{},{:.4}", mode, per_step_us);
    }
}
