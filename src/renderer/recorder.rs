//! Painter that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Color, Paint, Painter};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillPath {
        points: Vec<Vec2>,
        paint: Paint,
    },
    StrokePath {
        points: Vec<Vec2>,
        paint: Paint,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    FillText {
        text: String,
        pos: Vec2,
        font_px: f32,
        color: Color,
    },
}

/// Records every draw call in order
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded frame, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Painter for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_path(&mut self, points: &[Vec2], paint: &Paint) {
        self.ops.push(DrawOp::FillPath {
            points: points.to_vec(),
            paint: *paint,
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint, width: f32) {
        self.ops.push(DrawOp::StrokePath {
            points: points.to_vec(),
            paint: *paint,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            pos,
            font_px,
            color,
        });
    }
}
