//! Browser canvas surface

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface};

/// [`Surface`] over a canvas element's 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Size is read once; resizing is not handled
    pub fn new(canvas: &HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
