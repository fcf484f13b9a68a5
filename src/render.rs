use std::f64::consts::TAU;

use snow_core::DrawSurface;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ATTR_ACTIVE, SNOW_FILL_RGB};

/// `DrawSurface` over a `<canvas>` with a 2D context.
///
/// A canvas without a usable context still reports its size, but every
/// draw call becomes a no-op.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = context_2d(&canvas);
        if ctx.is_none() {
            log::warn!("[snow] canvas has no 2d context; drawing disabled");
        }
        Self { canvas, ctx }
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

impl DrawSurface for CanvasSurface {
    fn css_size(&self) -> (f64, f64) {
        (
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
        )
    }

    fn device_pixel_ratio(&self) -> f64 {
        web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        if let Some(ctx) = &self.ctx {
            let (w, h) = self.backing_size();
            ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, alpha: f32) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        ctx.begin_path();
        ctx.set_fill_style_str(&format!("rgba({}, {:.4})", SNOW_FILL_RGB, alpha));
        if ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }

    fn mark_active(&mut self, active: bool) {
        _ = self
            .canvas
            .set_attribute(ATTR_ACTIVE, if active { "true" } else { "false" });
    }
}
