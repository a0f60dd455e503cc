//! `CanvasRenderingContext2d` painter (WASM only)

use glam::Vec2;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::{Color, LinearGradient, Paint, Painter};
use crate::consts::GLYPH_FONT_FAMILY;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, g: &LinearGradient) -> CanvasGradient {
        let gradient = self.ctx.create_linear_gradient(
            g.start.x as f64,
            g.start.y as f64,
            g.end.x as f64,
            g.end.y as f64,
        );
        // Only fails for offsets outside [0, 1] or unparsable colors
        let _ = gradient.add_color_stop(0.0, &g.from.to_css());
        let _ = gradient.add_color_stop(1.0, &g.to.to_css());
        gradient
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Linear(g) => self.ctx.set_fill_style_canvas_gradient(&self.gradient(g)),
        }
    }

    fn set_stroke(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.to_css()),
            Paint::Linear(g) => self.ctx.set_stroke_style_canvas_gradient(&self.gradient(g)),
        }
    }

    fn trace(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        true
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_path(&mut self, points: &[Vec2], paint: &Paint) {
        if self.trace(points) {
            self.ctx.close_path();
            self.set_fill(paint);
            self.ctx.fill();
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint, width: f32) {
        if self.trace(points) {
            self.set_stroke(paint);
            self.ctx.set_line_width(width as f64);
            self.ctx.stroke();
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ctx.begin_path();
        // Negative radii throw
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.set_fill(paint);
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color) {
        self.ctx
            .set_font(&format!("{}px {}", font_px, GLYPH_FONT_FAMILY));
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
