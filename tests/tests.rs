use solsim::simulation::states::{BodyId, NVec3, System};
use solsim::simulation::{catalog, orbit};
use solsim::{
    fixed_look, CollisionOutcome, EngineConfig, FrameInput, Impactor, ParametersConfig, Scenario,
    ScenarioConfig, ViewMode,
};

use nalgebra::{Matrix4, Rotation3, Translation3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::f64::consts::TAU;

/// Build a system with the full catalog placed at the given clock value
fn system_at(clock: f64) -> System {
    let mut sys = System {
        bodies: catalog::solar_system(),
        clock,
    };
    orbit::place_bodies(&mut sys);
    sys
}

/// Build a runtime scenario without going through YAML
fn test_scenario(view_mode: u8, start_day: f64) -> Scenario {
    Scenario::build_scenario(ScenarioConfig {
        engine: EngineConfig { view_mode },
        parameters: ParametersConfig {
            simulation_speed: 0.01,
            start_day,
            seed: 42,
            move_speed: 10.0,
            turn_rate: 1.0,
        },
    })
}

/// Frame input with the cursor exactly at screen center and no keys held
fn centered_input(delta_seconds: f64) -> FrameInput {
    FrameInput {
        delta_seconds,
        cursor_x: 640.0,
        cursor_y: 360.0,
        viewport_width: 1280.0,
        viewport_height: 720.0,
        ..Default::default()
    }
}

/// An active impactor parked at `x` with zero velocity
fn parked_impactor(x: NVec3) -> Impactor {
    let mut imp = Impactor::idle();
    imp.active = true;
    imp.x = x;
    imp
}

fn assert_vec_eq(a: NVec3, b: NVec3, tol: f64) {
    assert!((a - b).norm() <= tol, "expected {:?}, got {:?}", b, a);
}

// ==================================================================================
// Orbit/rotation evaluator tests
// ==================================================================================

#[test]
fn bodies_orbit_at_constant_radius() {
    for clock in [0.0, 3.7, 123.456, 9999.25] {
        let sys = system_at(clock);
        for b in sys.alive() {
            let center = match b.primary {
                Some(id) => sys.body(id).x,
                None => NVec3::zeros(),
            };
            let dist = (b.x - center).norm();
            assert!(
                (dist - b.orbit_radius).abs() < 1e-9,
                "{:?} at clock {}: distance {} vs radius {}",
                b.id,
                clock,
                dist,
                b.orbit_radius
            );
        }
    }
}

#[test]
fn orbits_are_periodic() {
    for (id, period) in [
        (BodyId::Earth, 365.0),
        (BodyId::Mercury, 87.97),
        (BodyId::Neptune, 60148.35),
    ] {
        let t = 41.5;
        let before = system_at(t).body(id).x;
        let after = system_at(t + period).body(id).x;
        assert_vec_eq(after, before, 1e-6);
    }

    // The Moon is periodic relative to the Earth, not in absolute terms
    let t = 41.5;
    let sys_a = system_at(t);
    let sys_b = system_at(t + 27.322);
    let rel_a = sys_a.body(BodyId::Moon).x - sys_a.body(BodyId::Earth).x;
    let rel_b = sys_b.body(BodyId::Moon).x - sys_b.body(BodyId::Earth).x;
    assert_vec_eq(rel_b, rel_a, 1e-6);
}

#[test]
fn start_of_time_scenario() {
    let sys = system_at(0.0);

    assert_vec_eq(sys.body(BodyId::Earth).x, NVec3::new(30.0, 0.0, 0.0), 1e-12);
    assert_vec_eq(sys.body(BodyId::Moon).x, NVec3::new(34.0, 0.0, 0.0), 1e-12);
    assert_vec_eq(sys.body(BodyId::Sun).x, NVec3::zeros(), 1e-12);
    assert_eq!(sys.body(BodyId::Sun).transform, Matrix4::new_scaling(3.0));
}

#[test]
fn moon_spin_is_retrograde() {
    // fract(6.75 / 27) = 0.25, negated: a quarter turn backward
    let sys = system_at(6.75);
    let moon = sys.body(BodyId::Moon);

    let expected = Translation3::from(moon.x).to_homogeneous()
        * Rotation3::from_axis_angle(&NVec3::y_axis(), -0.25 * TAU).to_homogeneous()
        * Matrix4::new_scaling(0.27);

    assert!((moon.transform - expected).norm() < 1e-9);
}

// ==================================================================================
// Impactor tests
// ==================================================================================

#[test]
fn impactor_advances_at_constant_velocity() {
    let mut sys = system_at(0.0);
    let mut imp = parked_impactor(NVec3::new(200.0, 0.0, 200.0));
    imp.speed = NVec3::new(0.01, 0.0, 0.002);
    imp.dir = NVec3::new(1.0, 0.0, -1.0);

    imp.step(&mut sys);
    assert_vec_eq(imp.x, NVec3::new(200.01, 0.0, 199.998), 1e-12);

    imp.step(&mut sys);
    assert_vec_eq(imp.x, NVec3::new(200.02, 0.0, 199.996), 1e-12);
}

#[test]
fn capture_band_nudges_toward_body() {
    // Earth at (30, 0, 0) with collision radius 1: (1.5, 1.5) away on the
    // positive side of both axes is inside the capture band
    let mut sys = system_at(0.0);
    let mut imp = parked_impactor(NVec3::new(31.5, 0.0, 1.5));

    imp.step(&mut sys);

    assert!(!imp.destroyed);
    assert!(!sys.body(BodyId::Earth).destroyed);
    assert_vec_eq(imp.x, NVec3::new(31.48, 0.0, 1.48), 1e-12);

    // symmetric handling on the negative side
    let mut imp = parked_impactor(NVec3::new(28.5, 0.0, -1.5));
    imp.step(&mut sys);
    assert_vec_eq(imp.x, NVec3::new(28.52, 0.0, -1.48), 1e-12);
}

#[test]
fn direct_hit_destroys_body_and_impactor() {
    let mut sys = system_at(0.0);
    let mut imp = parked_impactor(NVec3::new(30.3, 0.0, 0.3));

    imp.step(&mut sys);

    let earth = sys.body(BodyId::Earth);
    assert!(earth.destroyed);
    assert_eq!(earth.transform, Matrix4::zeros());
    assert_vec_eq(earth.x, NVec3::zeros(), 0.0);
    assert!(imp.destroyed);
    assert_eq!(imp.transform, Matrix4::zeros());
}

#[test]
fn destruction_is_permanent() {
    let mut sys = system_at(0.0);
    let mut imp = parked_impactor(NVec3::new(30.3, 0.0, 0.3));
    imp.step(&mut sys);
    assert!(sys.body(BodyId::Earth).destroyed);

    // the evaluator never resurrects a destroyed body
    for _ in 0..100 {
        orbit::advance(&mut sys, 1.0 / 60.0, 1.0);
        let earth = sys.body(BodyId::Earth);
        assert!(earth.destroyed);
        assert_eq!(earth.transform, Matrix4::zeros());
        assert_vec_eq(earth.x, NVec3::zeros(), 0.0);
    }

    // the Moon keeps orbiting, now around the zeroed Earth position
    assert!(!sys.body(BodyId::Moon).destroyed);
    assert!((sys.body(BodyId::Moon).x.norm() - 4.0).abs() < 1e-9);
}

#[test]
fn impactor_deactivates_on_impact() {
    let mut sys = system_at(0.0);
    let mut imp = parked_impactor(NVec3::new(30.3, 0.0, 0.3));
    imp.speed = NVec3::new(0.01, 0.0, 0.01);

    imp.step(&mut sys);
    assert!(imp.destroyed);
    assert!(!imp.active);

    // a spent impactor accrues no further position updates
    let parked = imp.x;
    imp.step(&mut sys);
    assert_vec_eq(imp.x, parked, 0.0);

    // respawning reactivates it with the destroyed flag cleared
    let mut rng = StdRng::seed_from_u64(7);
    imp.spawn(&mut rng);
    assert!(imp.active);
    assert!(!imp.destroyed);
}

#[test]
fn coincident_bodies_destroyed_in_same_frame() {
    // the proximity loop does not exit on the first hit
    let mut sys = system_at(0.0);
    let earth_pos = sys.body(BodyId::Earth).x;
    sys.body_mut(BodyId::Venus).x = earth_pos;

    let mut imp = parked_impactor(earth_pos + NVec3::new(0.3, 0.0, 0.3));
    imp.step(&mut sys);

    assert!(sys.body(BodyId::Earth).destroyed);
    assert!(sys.body(BodyId::Venus).destroyed);
}

#[test]
fn test_and_resolve_reports_outcomes() {
    let mut sys = system_at(0.0);

    let mut imp = parked_impactor(NVec3::new(45.0, 0.0, 45.0));
    let miss = imp.test_and_resolve(sys.body_mut(BodyId::Earth));
    assert_eq!(miss, CollisionOutcome::Miss);

    let mut imp = parked_impactor(NVec3::new(31.5, 0.0, 1.5));
    let captured = imp.test_and_resolve(sys.body_mut(BodyId::Earth));
    assert_eq!(captured, CollisionOutcome::Captured);

    let mut imp = parked_impactor(NVec3::new(30.3, 0.0, 0.3));
    let destroyed = imp.test_and_resolve(sys.body_mut(BodyId::Earth));
    assert_eq!(destroyed, CollisionOutcome::Destroyed);
}

#[test]
fn spawn_draws_are_bounded_and_quantized() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut imp = Impactor::idle();

    for _ in 0..200 {
        imp.spawn(&mut rng);

        for axis in [imp.x.x, imp.x.z] {
            assert!((1.0..=50.0).contains(&axis), "spawn axis out of range: {axis}");
        }
        for speed in [imp.speed.x, imp.speed.z] {
            assert!(speed >= 0.0 && speed <= 0.019 + 1e-9, "speed out of range: {speed}");
            let steps = speed / 0.001;
            assert!((steps - steps.round()).abs() < 1e-9, "speed not quantized: {speed}");
        }
        for sign in [imp.dir.x, imp.dir.z] {
            assert!(sign == 1.0 || sign == -1.0);
        }
    }
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn fixed_modes_are_pure() {
    let mut scenario = test_scenario(0, 17.62);
    let input = centered_input(0.0);

    for mode in [
        ViewMode::FrontOfEarth,
        ViewMode::BehindEarth,
        ViewMode::FromSun,
        ViewMode::SystemMidpoint,
    ] {
        scenario.camera.mode = mode;
        scenario.camera.update(&scenario.system, &input, 10.0, 1.0);
        let first = scenario.camera.view;
        scenario.camera.update(&scenario.system, &input, 10.0, 1.0);
        assert_eq!(scenario.camera.view, first, "{:?} retained state", mode);
    }
}

#[test]
fn system_midpoint_mode_spans_mercury_to_neptune() {
    let sys = system_at(17.62);
    let (eye, target) = fixed_look(ViewMode::SystemMidpoint, &sys).expect("fixed mode");

    assert_vec_eq(eye, NVec3::zeros(), 0.0);
    let midpoint = (sys.body(BodyId::Mercury).x + sys.body(BodyId::Neptune).x) * 0.5;
    assert_vec_eq(target, midpoint, 0.0);
}

#[test]
fn free_fly_holds_steady_with_no_input() {
    let mut scenario = test_scenario(4, 17.62);
    let input = centered_input(1.0 / 60.0);

    scenario.step(&input);
    let first = scenario.camera.view;
    for _ in 0..10 {
        scenario.step(&input);
        assert_eq!(scenario.camera.view, first);
    }
}

#[test]
fn free_fly_seeds_from_previous_fixed_view() {
    let mut scenario = test_scenario(2, 17.62);
    let input = centered_input(1.0 / 60.0);

    scenario.step(&input);
    let fixed = scenario.camera.view;

    let mut switch = centered_input(1.0 / 60.0);
    switch.select_mode = Some(4);
    scenario.step(&switch);

    // no keys, centered cursor: the free camera starts where the fixed one was
    assert_eq!(scenario.camera.view, fixed);
}

#[test]
fn free_fly_moves_along_basis() {
    let mut scenario = test_scenario(4, 17.62);

    let mut input = centered_input(1.0);
    input.forward = true;
    scenario.step(&input);

    // initial basis looks down -Z; one second forward at move_speed 10
    let position = NVec3::new(
        scenario.camera.view[(0, 3)],
        scenario.camera.view[(1, 3)],
        scenario.camera.view[(2, 3)],
    );
    assert_vec_eq(position, NVec3::new(0.0, 0.0, -10.0), 1e-12);
}

#[test]
fn free_fly_yaws_outside_dead_zone() {
    let mut scenario = test_scenario(4, 17.62);
    let input = centered_input(1.0 / 60.0);
    scenario.step(&input);
    let before = scenario.camera.view;

    let mut turned = centered_input(1.0 / 60.0);
    turned.cursor_x += 150.0; // past the +-100 px dead zone
    scenario.step(&turned);

    assert_ne!(scenario.camera.view, before);
    // yaw about world up leaves the up axis untouched and the basis unit-length
    assert_vec_eq(scenario.camera.basis.up, NVec3::new(0.0, 1.0, 0.0), 1e-12);
    assert!((scenario.camera.basis.forward.norm() - 1.0).abs() < 1e-12);
}

// ==================================================================================
// Clock and scenario tests
// ==================================================================================

#[test]
fn clock_accumulates_scaled_delta() {
    let mut scenario = test_scenario(3, 0.0);

    scenario.step(&centered_input(2.0));
    assert!((scenario.system.clock - 0.02).abs() < 1e-12);

    scenario.step(&centered_input(1.0));
    assert!((scenario.system.clock - 0.03).abs() < 1e-12);
}

#[test]
fn spawn_key_activates_impactor() {
    let mut scenario = test_scenario(3, 0.0);
    assert!(!scenario.impactor.active);

    let mut input = centered_input(1.0 / 60.0);
    input.spawn_impactor = true;
    scenario.step(&input);

    assert!(scenario.impactor.active);
    // same seed, same draws
    let first_spawn = scenario.impactor.x;
    let mut replay = test_scenario(3, 0.0);
    replay.step(&input);
    assert_vec_eq(replay.impactor.x, first_spawn, 1e-9);
}
