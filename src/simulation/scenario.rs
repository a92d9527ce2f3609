//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the catalog placed at the start day)
//! - the transient impactor and the camera state
//! - the seeded RNG feeding impactor spawns
//!
//! The scenario is inserted into Bevy as a `Resource`; the viewer calls
//! [`Scenario::step`] once per frame and reads the resulting transforms and
//! view matrix.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::camera::{CameraState, ViewMode};
use crate::simulation::catalog;
use crate::simulation::impactor::Impactor;
use crate::simulation::input::FrameInput;
use crate::simulation::orbit;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Bevy resource representing a fully-initialized scenario.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// parameters, current system state, the impactor slot, the camera, and the
/// RNG. Everything a frame step mutates lives here, so the core runs without
/// a window in tests.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub impactor: Impactor,
    pub camera: CameraState,
    pub rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            simulation_speed: p_cfg.simulation_speed,
            start_day: p_cfg.start_day,
            seed: p_cfg.seed,
            move_speed: p_cfg.move_speed,
            turn_rate: p_cfg.turn_rate,
        };

        // Initial system state: the catalog placed at the start day
        let mut system = System {
            bodies: catalog::solar_system(),
            clock: parameters.start_day,
        };
        orbit::place_bodies(&mut system);

        Self {
            system,
            impactor: Impactor::idle(),
            camera: CameraState::new(ViewMode::from_index(cfg.engine.view_mode)),
            rng: StdRng::seed_from_u64(parameters.seed),
            parameters,
        }
    }

    /// One simulation frame: mode selection and impactor spawn from input,
    /// then orbits, then the impactor, then the camera.
    pub fn step(&mut self, input: &FrameInput) {
        if let Some(index) = input.select_mode {
            self.camera.mode = ViewMode::from_index(index);
        }
        if input.spawn_impactor {
            self.impactor.spawn(&mut self.rng);
        }

        orbit::advance(
            &mut self.system,
            input.delta_seconds,
            self.parameters.simulation_speed,
        );
        self.impactor.step(&mut self.system);
        self.camera.update(
            &self.system,
            input,
            self.parameters.move_speed,
            self.parameters.turn_rate,
        );
    }
}
