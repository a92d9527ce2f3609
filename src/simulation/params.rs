//! Runtime parameters for the simulation.
//!
//! `Parameters` holds the per-scenario numeric settings:
//! - clock rate and starting value,
//! - impactor RNG seed,
//! - free-fly camera speeds

#[derive(Debug, Clone)]
pub struct Parameters {
    pub simulation_speed: f64, // simulated days per wall-clock second
    pub start_day: f64, // initial clock value in simulated days
    pub seed: u64, // seed for the impactor spawn draws
    pub move_speed: f64, // free-fly translation, units per second
    pub turn_rate: f64, // free-fly yaw/pitch, radians per second
}
