//! HTML canvas 2D surface

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::platform::PlatformError;

/// Paints onto a canvas through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(PlatformError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::ContextUnavailable)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        let pattern = js_sys::Array::of2(&JsValue::from(dash[0]), &JsValue::from(dash[1]));
        let solid = js_sys::Array::new();

        self.ctx.set_stroke_style_str(color);
        let _ = self.ctx.set_line_dash(&pattern);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        let _ = self.ctx.set_line_dash(&solid);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.close_path();
        self.ctx.fill();
    }
}
