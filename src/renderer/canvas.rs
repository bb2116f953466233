//! Canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Surface, TextStyle};
use crate::error::BootError;

/// Surface backed by a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas to the field and take its 2D context
    pub fn new(canvas: &HtmlCanvasElement, field: Vec2) -> Result<Self, BootError> {
        canvas.set_width(field.x.round() as u32);
        canvas.set_height(field.y.round() as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(BootError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BootError::NoContext2d)?;

        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        // Only fails on a negative radius
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            log::warn!("Skipped circle with radius {}", radius);
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_text_align(style.align.as_str());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
