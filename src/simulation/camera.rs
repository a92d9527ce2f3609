//! Camera selector.
//!
//! Modes 0-3 are stateless viewpoints recomputed every frame from current
//! body positions; mode 4 is a stateful free-fly camera whose basis persists
//! across frames and is mutated by keyboard/cursor input. Every mode produces
//! a camera-to-world view matrix, the inverse of a right-handed look-at.

use nalgebra::{Isometry3, Point3, Rotation3, Unit};

use super::input::FrameInput;
use super::states::{BodyId, NMat4, NVec3, System};

/// Cursor dead zone around screen center, in pixels per axis.
pub const DEAD_ZONE_PX: f64 = 100.0;

/// The five viewpoints. Indices match the external mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    FrontOfEarth = 0,
    BehindEarth = 1,
    FromSun = 2,
    SystemMidpoint = 3,
    FreeFly = 4,
}

impl ViewMode {
    /// Map the external selector to a mode. Out-of-range values fall back to
    /// the default viewpoint.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => ViewMode::FrontOfEarth,
            1 => ViewMode::BehindEarth,
            2 => ViewMode::FromSun,
            4 => ViewMode::FreeFly,
            _ => ViewMode::SystemMidpoint,
        }
    }
}

/// Explicit free-fly orientation/position, persisted in state instead of
/// being re-derived from view-matrix columns each frame.
#[derive(Debug, Clone)]
pub struct CameraBasis {
    pub left: NVec3,
    pub up: NVec3,
    pub forward: NVec3,
    pub position: NVec3,
}

impl CameraBasis {
    /// Decompose a camera-to-world matrix: column 0 is the right axis,
    /// column 1 up, column 2 back, column 3 the position.
    pub fn from_view(view: &NMat4) -> Self {
        Self {
            left: -col3(view, 0),
            up: col3(view, 1),
            forward: -col3(view, 2),
            position: col3(view, 3),
        }
    }

    /// Reassemble the camera-to-world matrix.
    pub fn to_view(&self) -> NMat4 {
        let mut m = NMat4::identity();
        m.fixed_view_mut::<3, 1>(0, 0).copy_from(&(-self.left));
        m.fixed_view_mut::<3, 1>(0, 1).copy_from(&self.up);
        m.fixed_view_mut::<3, 1>(0, 2).copy_from(&(-self.forward));
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.position);
        m
    }

    fn yaw(&mut self, angle: f64) {
        let rot = Rotation3::from_axis_angle(&NVec3::y_axis(), angle);
        self.left = rot * self.left;
        self.up = rot * self.up;
        self.forward = rot * self.forward;
    }

    fn pitch(&mut self, angle: f64) {
        let axis = Unit::new_normalize(self.left);
        let rot = Rotation3::from_axis_angle(&axis, angle);
        self.up = rot * self.up;
        self.forward = rot * self.forward;
    }
}

#[derive(Debug, Clone)]
pub struct CameraState {
    pub mode: ViewMode,
    pub basis: CameraBasis,
    /// Camera-to-world matrix produced last frame.
    pub view: NMat4,
    in_free_fly: bool,
}

impl CameraState {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            basis: CameraBasis::from_view(&NMat4::identity()),
            view: NMat4::identity(),
            in_free_fly: false,
        }
    }

    /// Produce this frame's view matrix. Fixed modes are pure functions of
    /// body positions; free-fly seeds its basis from the previous view matrix
    /// when entered and then integrates input.
    pub fn update(&mut self, sys: &System, input: &FrameInput, move_speed: f64, turn_rate: f64) {
        if let Some((eye, target)) = fixed_look(self.mode, sys) {
            self.view = look_at_inverse(eye, target);
            self.in_free_fly = false;
        } else {
            if !self.in_free_fly {
                self.basis = CameraBasis::from_view(&self.view);
                self.in_free_fly = true;
            }
            self.free_fly(input, move_speed, turn_rate);
            self.view = self.basis.to_view();
        }
    }

    fn free_fly(&mut self, input: &FrameInput, move_speed: f64, turn_rate: f64) {
        let dt = input.delta_seconds;
        let step = move_speed * dt;
        let b = &mut self.basis;

        if input.forward {
            b.position += b.forward * step;
        }
        if input.back {
            b.position -= b.forward * step;
        }
        if input.left {
            b.position += b.left * step;
        }
        if input.right {
            b.position -= b.left * step;
        }

        let angle = turn_rate * dt;
        let center_x = input.viewport_width * 0.5;
        let center_y = input.viewport_height * 0.5;

        if input.cursor_x > center_x + DEAD_ZONE_PX {
            b.yaw(-angle);
        } else if input.cursor_x < center_x - DEAD_ZONE_PX {
            b.yaw(angle);
        }
        // screen y grows downward
        if input.cursor_y > center_y + DEAD_ZONE_PX {
            b.pitch(-angle);
        } else if input.cursor_y < center_y - DEAD_ZONE_PX {
            b.pitch(angle);
        }
    }
}

/// Eye/target pair for the fixed viewpoints; `None` for free-fly.
pub fn fixed_look(mode: ViewMode, sys: &System) -> Option<(NVec3, NVec3)> {
    let earth = sys.body(BodyId::Earth).x;
    let moon = sys.body(BodyId::Moon).x;
    match mode {
        ViewMode::FrontOfEarth => {
            Some((earth + NVec3::new(-3.0, 1.0, 3.0).normalize() * 5.0, earth))
        }
        ViewMode::BehindEarth => Some((
            earth + NVec3::new(-3.0, -2.0, 3.0).normalize() * -5.0,
            (earth + moon) * 0.5,
        )),
        ViewMode::FromSun => Some((NVec3::zeros(), (earth + moon) * 0.5)),
        ViewMode::SystemMidpoint => Some((
            NVec3::zeros(),
            (sys.body(BodyId::Mercury).x + sys.body(BodyId::Neptune).x) * 0.5,
        )),
        ViewMode::FreeFly => None,
    }
}

/// Inverse of a right-handed look-at, i.e. the camera-to-world matrix for a
/// camera at `eye` looking at `target` with +Y as world up.
pub fn look_at_inverse(eye: NVec3, target: NVec3) -> NMat4 {
    Isometry3::look_at_rh(&Point3::from(eye), &Point3::from(target), &NVec3::y())
        .inverse()
        .to_homogeneous()
}

fn col3(m: &NMat4, c: usize) -> NVec3 {
    NVec3::new(m[(0, c)], m[(1, c)], m[(2, c)])
}
