//! Orbit/rotation evaluator.
//!
//! Converts the simulation clock into an orbital angle and a spin angle per
//! body and rebuilds each body's world position and local-to-world transform
//! in place. All orbits lie in the horizontal plane; rotation is about the
//! vertical axis only.

use std::f64::consts::TAU;

use nalgebra::{Matrix4, Rotation3, Translation3};

use super::states::{Body, NVec3, System};

/// Advance the clock by `delta_seconds * simulation_speed` simulated days and
/// re-place every non-destroyed body.
pub fn advance(sys: &mut System, delta_seconds: f64, simulation_speed: f64) {
    sys.clock += delta_seconds * simulation_speed;
    place_bodies(sys);
}

/// Recompute position and transform for every non-destroyed body from the
/// current clock value. Destroyed bodies are left untouched; the impactor
/// owns zeroing them exactly once at the destruction transition.
pub fn place_bodies(sys: &mut System) {
    let clock = sys.clock;

    // Primaries first so satellites can read their center's fresh position.
    for i in 0..sys.bodies.len() {
        if sys.bodies[i].primary.is_none() {
            place_body(&mut sys.bodies[i], clock, NVec3::zeros());
        }
    }
    for i in 0..sys.bodies.len() {
        if let Some(primary) = sys.bodies[i].primary {
            let center = sys.body(primary).x;
            place_body(&mut sys.bodies[i], clock, center);
        }
    }
}

fn place_body(b: &mut Body, clock: f64, center: NVec3) {
    if b.destroyed {
        return;
    }

    let orbit = clock / b.orbit_days * TAU;
    b.x = center + b.orbit_radius * NVec3::new(orbit.cos(), 0.0, orbit.sin());

    let spin = b.spin_dir * (clock / b.spin_days).fract() * TAU;

    // translation * rotation * scale, rotation about +Y only
    let t = Translation3::from(b.x).to_homogeneous();
    let r = Rotation3::from_axis_angle(&NVec3::y_axis(), spin).to_homogeneous();
    let s = Matrix4::new_scaling(b.scale);
    b.transform = t * r * s;
}
