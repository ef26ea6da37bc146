// Renderer struct that wraps a canvas and its 2d context and implements
// `Surface` with plain canvas path calls.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::error::NetworkError;
use crate::log;
use crate::surface::Surface;

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from a canvas already on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, NetworkError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| NetworkError::Surface(format!("{:?}", e)))?
            .ok_or_else(|| NetworkError::Surface("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| NetworkError::Surface("context is not a CanvasRenderingContext2d".to_owned()))?;

        Ok(CanvasRenderer { canvas, context })
    }
}

impl Surface for CanvasRenderer {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        self.context.begin_path();
        if let Err(e) = self.context.arc(center[0], center[1], radius, 0.0, TAU) {
            log!("particle network: arc failed: {:?}", e);
            return;
        }
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, opacity: f64, width: f64) {
        self.context.set_global_alpha(opacity);
        self.context.set_stroke_style_str(&color.to_css());
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        self.context.set_global_alpha(1.0);
    }
}
