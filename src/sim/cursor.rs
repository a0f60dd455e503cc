//! Two-point cursor follower
//!
//! The dot tracks the pointer exactly; the trail eases toward it every frame.

use glam::Vec2;

use crate::consts::{CURSOR_START, TRAIL_SMOOTHING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTracker {
    instant: Vec2,
    trail: Vec2,
}

impl Default for CursorTracker {
    fn default() -> Self {
        let start = Vec2::splat(CURSOR_START);
        Self {
            instant: start,
            trail: start,
        }
    }
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `pos` (client coordinates)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.instant = pos;
    }

    /// Ease the trail one frame toward the pointer
    pub fn tick(&mut self) {
        self.trail += (self.instant - self.trail) * TRAIL_SMOOTHING;
    }

    pub fn instant(&self) -> Vec2 {
        self.instant
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }
}
