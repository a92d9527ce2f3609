//! Per-frame input snapshot consumed by the simulation core.
//!
//! The windowing layer fills one of these each frame; the core never touches
//! Bevy input types directly, so tests can drive it headless.

/// Everything the core reads from the outside world in one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub delta_seconds: f64,
    /// Free-fly movement keys, held state.
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Spawn-impactor key, edge-triggered by the caller.
    pub spawn_impactor: bool,
    /// Cursor position in pixels, origin top-left.
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// External view-mode selector, if it changed this frame.
    pub select_mode: Option<u8>,
}
