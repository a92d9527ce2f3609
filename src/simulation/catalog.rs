//! The fixed ten-body catalog.
//!
//! Periods are in simulated days, radii and scales in world units. These are
//! process-lifetime constants; only `destroyed`, `x` and `transform` mutate.

use super::states::{Body, BodyId, NMat4, NVec3};

fn body(
    id: BodyId,
    orbit_days: f64,
    orbit_radius: f64,
    spin_days: f64,
    spin_dir: f64,
    scale: f64,
    primary: Option<BodyId>,
) -> Body {
    Body {
        id,
        orbit_days,
        orbit_radius,
        spin_days,
        spin_dir,
        scale,
        primary,
        destroyed: false,
        x: NVec3::zeros(),
        transform: NMat4::identity(),
    }
}

/// Build the full solar system at rest, in `BodyId` order.
///
/// The Sun sits at the origin with no orbit or rotation, the Moon orbits the
/// Earth, everything else orbits the origin. The Moon spins retrograde.
pub fn solar_system() -> Vec<Body> {
    vec![
        body(BodyId::Earth, 365.0, 30.0, 1.0, 1.0, 1.0, None),
        body(BodyId::Sun, 1.0, 0.0, 1.0, 0.0, 3.0, None),
        body(BodyId::Moon, 27.322, 4.0, 27.0, -1.0, 0.27, Some(BodyId::Earth)),
        body(BodyId::Mercury, 87.97, 10.0, 58.6, 1.0, 0.3, None),
        body(BodyId::Venus, 224.7, 20.0, 243.0, 1.0, 1.0, None),
        body(BodyId::Mars, 686.2, 40.0, 1.03, 1.0, 0.7, None),
        body(BodyId::Jupiter, 4328.9, 50.0, 0.41, 1.0, 5.0, None),
        body(BodyId::Saturn, 10752.9, 60.0, 0.45, 1.0, 4.0, None),
        body(BodyId::Uranus, 30663.65, 70.0, 0.72, 1.0, 2.0, None),
        body(BodyId::Neptune, 60148.35, 80.0, 0.67, 1.0, 3.0, None),
    ]
}
