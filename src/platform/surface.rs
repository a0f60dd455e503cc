//! Canvas elements bound to effects

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use crate::renderer::canvas2d::CanvasPainter;

/// A `<canvas>` and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to the canvas with element id `id`
    pub fn bind(id: &str) -> Result<Self, JsValue> {
        let canvas = dom::element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Size the drawing buffer to the element's on-screen size.
    ///
    /// Only touches the buffer when the size changed, since resizing clears it.
    pub fn fit(&self) -> (u32, u32) {
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        (width, height)
    }

    pub fn painter(&self) -> CanvasPainter {
        CanvasPainter::new(self.ctx.clone())
    }
}
