//! Canvas drawing seam
//!
//! Effects describe each frame through [`Painter`]. In the browser the calls land
//! on a 2D canvas context; the [`Recorder`] keeps them for tests and the native
//! preview.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod color;
pub mod recorder;
pub mod scene;

use glam::Vec2;

pub use color::{Color, LinearGradient, Paint};
pub use recorder::{DrawOp, Recorder};
pub use scene::Scene;

/// Immediate-mode 2D drawing target
pub trait Painter {
    /// Erase the whole surface to transparent
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Fill the closed polygon through `points`
    fn fill_path(&mut self, points: &[Vec2], paint: &Paint);

    /// Stroke the open polyline through `points`
    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Draw `text` with its alphabetic baseline at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color);
}
