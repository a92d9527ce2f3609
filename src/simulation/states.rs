//! Core state types for the solar-system simulation.
//!
//! Defines the body table and the system wrapper:
//! - `BodyId`   identifies one of the ten catalog slots
//! - `Body`     orbital constants plus mutable position/transform/destroyed state
//! - `System`   the list of bodies and the simulation clock
//!
//! Bodies are stored in `BodyId` order, so `System::body` indexes directly.

use nalgebra::{Matrix4, Vector3};
pub type NVec3 = Vector3<f64>;
pub type NMat4 = Matrix4<f64>;

/// Catalog slot for each celestial body. The discriminants double as indices
/// into `System::bodies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyId {
    Earth = 0,
    Sun = 1,
    Moon = 2,
    Mercury = 3,
    Venus = 4,
    Mars = 5,
    Jupiter = 6,
    Saturn = 7,
    Uranus = 8,
    Neptune = 9,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub orbit_days: f64, // orbital period in simulated days
    pub orbit_radius: f64, // distance from the orbit center
    pub spin_days: f64, // rotation period in simulated days
    pub spin_dir: f64, // +1 prograde, -1 retrograde, 0 no rotation
    pub scale: f64, // render scale, doubles as the collision radius
    pub primary: Option<BodyId>, // orbit center; None orbits the origin
    pub destroyed: bool, // one-way latch set by the impactor
    pub x: NVec3, // current world position
    pub transform: NMat4, // current local-to-world transform
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // all ten bodies, in BodyId order
    pub clock: f64, // elapsed simulated days, monotonic
}

impl System {
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id as usize]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id as usize]
    }

    /// Iterate all bodies that have not been destroyed.
    pub fn alive(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.destroyed)
    }
}
