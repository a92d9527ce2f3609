//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – viewer-level options (initial view mode)
//! - [`ParametersConfig`] – clock, seed, and free-fly camera settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! The body catalog is not configurable: orbital periods, radii and scales
//! are compile-time constants (see `simulation::catalog`).
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   view_mode: 3            # 0-3 fixed viewpoints, 4 free-fly
//!
//! parameters:
//!   simulation_speed: 0.01  # simulated days per second
//!   start_day: 17.62        # initial clock value
//!   seed: 42                # impactor spawn seed
//!   move_speed: 10.0        # free-fly units per second
//!   turn_rate: 1.0          # free-fly radians per second
//! ```

use serde::Deserialize;

/// Viewer-level configuration.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub view_mode: u8, // initial camera mode, 0..=4
}

/// Numeric parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub simulation_speed: f64, // simulated days per wall-clock second
    pub start_day: f64,        // initial clock value
    pub seed: u64,             // seed to make impactor spawns reproducible
    pub move_speed: f64,       // free-fly translation speed
    pub turn_rate: f64,        // free-fly rotation rate
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // viewer-level configuration
    pub parameters: ParametersConfig, // numeric parameters
}
