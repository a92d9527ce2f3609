//! Impactor (asteroid) simulator.
//!
//! A transient point mass spawned on key press. It drifts across the orbital
//! plane at constant velocity, gets nudged toward bodies it nearly misses
//! (the capture band), and destroys the first bodies whose collision box it
//! enters. Destruction is a one-way latch on the body; the impactor itself
//! deactivates on impact and can be respawned with fresh draws.

use rand::Rng;

use nalgebra::{Matrix4, Translation3};

use super::states::{Body, BodyId, NMat4, NVec3, System};

/// Fixed proximity-test order. The Sun is excluded.
pub const IMPACT_ORDER: [BodyId; 9] = [
    BodyId::Earth,
    BodyId::Venus,
    BodyId::Mercury,
    BodyId::Moon,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
];

/// Spawn position range per ground-plane axis.
const SPAWN_MIN: f64 = 1.0;
const SPAWN_MAX: f64 = 50.0;

/// Per-axis speed is quantized: `0..=SPEED_STEPS` times `SPEED_STEP` units
/// per frame.
const SPEED_STEP: f64 = 0.001;
const SPEED_STEPS: u32 = 19;

/// Capture band outer edge, as a multiple of the body's collision radius.
const CAPTURE_OUTER: f64 = 2.0;

/// Capture drift per frame, as a fraction of the body's collision radius.
const NUDGE: f64 = 0.02;

/// Render scale of the impactor itself.
const IMPACTOR_SCALE: f64 = 0.3;

/// Result of one impactor-vs-body proximity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Miss,
    Captured,
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct Impactor {
    pub active: bool,
    pub destroyed: bool,
    pub x: NVec3, // ground-plane position, y stays 0
    pub speed: NVec3, // per-axis step magnitude, units per frame
    pub dir: NVec3, // per-axis sign, +1 or -1
    pub transform: NMat4,
}

impl Impactor {
    /// An impactor that has never been spawned.
    pub fn idle() -> Self {
        Self {
            active: false,
            destroyed: false,
            x: NVec3::zeros(),
            speed: NVec3::zeros(),
            dir: NVec3::new(1.0, 0.0, 1.0),
            transform: NMat4::zeros(),
        }
    }

    /// (Re)activate with a fresh random position, direction and speed.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        self.active = true;
        self.destroyed = false;
        self.x = NVec3::new(
            rng.gen_range(SPAWN_MIN..=SPAWN_MAX),
            0.0,
            rng.gen_range(SPAWN_MIN..=SPAWN_MAX),
        );
        self.speed = NVec3::new(quantized_speed(rng), 0.0, quantized_speed(rng));
        self.dir = NVec3::new(random_sign(rng), 0.0, random_sign(rng));
        self.refresh_transform();
    }

    /// One frame: advance, then test every non-destroyed body in
    /// `IMPACT_ORDER`. The loop does not exit on the first hit, so
    /// coincident bodies can be destroyed in the same frame.
    pub fn step(&mut self, sys: &mut System) {
        if !self.active || self.destroyed {
            return;
        }

        self.x += self.speed.component_mul(&self.dir);

        for id in IMPACT_ORDER {
            if sys.body(id).destroyed {
                continue;
            }
            self.test_and_resolve(sys.body_mut(id));
        }

        if self.destroyed {
            // spent: stop accruing position updates until respawned
            self.active = false;
        } else {
            self.refresh_transform();
        }
    }

    /// Test this impactor against one body and resolve the outcome in place.
    ///
    /// Inside the collision radius on both ground axes: destroy the body
    /// (zeroing its position and transform permanently) and the impactor.
    /// In the capture band just outside the radius, on the same side along
    /// both axes: drift toward the body by `NUDGE * r` per axis.
    pub fn test_and_resolve(&mut self, body: &mut Body) -> CollisionOutcome {
        let r = body.scale;
        let dx = self.x.x - body.x.x;
        let dz = self.x.z - body.x.z;

        if dx.abs() < r && dz.abs() < r {
            body.destroyed = true;
            body.x = NVec3::zeros();
            body.transform = NMat4::zeros();
            self.destroyed = true;
            self.transform = NMat4::zeros();
            return CollisionOutcome::Destroyed;
        }

        let outer = CAPTURE_OUTER * r;
        let nudge = NUDGE * r;
        if dx > r && dx <= outer && dz > r && dz <= outer {
            self.x.x -= nudge;
            self.x.z -= nudge;
            return CollisionOutcome::Captured;
        }
        if dx < -r && dx >= -outer && dz < -r && dz >= -outer {
            self.x.x += nudge;
            self.x.z += nudge;
            return CollisionOutcome::Captured;
        }

        CollisionOutcome::Miss
    }

    fn refresh_transform(&mut self) {
        let t = Translation3::from(self.x).to_homogeneous();
        let s = Matrix4::new_scaling(IMPACTOR_SCALE);
        self.transform = t * s;
    }
}

fn quantized_speed<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..=SPEED_STEPS)) * SPEED_STEP
}

fn random_sign<R: Rng>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
