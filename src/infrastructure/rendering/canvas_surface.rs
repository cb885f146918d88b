use super::surface::{RenderSurface, StrokeStyle, TextStyle};
use crate::domain::chart::Color;
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`RenderSurface`] over a 2D canvas context.
///
/// The backing store is sized to `css size * devicePixelRatio` on every frame
/// and the context is scaled so callers keep drawing in CSS pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| AppError::RenderingError(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| AppError::RenderingError("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("failed to cast to 2D context".to_string()))?;
        Ok(Self { canvas, context })
    }

    pub fn from_element_id(canvas_id: &str) -> RenderingResult<Self> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| AppError::RenderingError(format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderingError(format!("'{}' is not a canvas", canvas_id)))?;
        Self::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn device_pixel_ratio() -> f64 {
        web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(1.0)
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        self.context.set_stroke_style_str(&style.color.to_css());
        self.context.set_line_width(style.width);
        let pattern = match style.dash {
            Some([on, off]) => js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)),
            None => js_sys::Array::new(),
        };
        if let Err(e) = self.context.set_line_dash(&pattern) {
            crate::log_warn!(LogComponent::Infrastructure("CanvasSurface"), "setLineDash failed: {:?}", e);
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn begin_frame(&mut self, width: f64, height: f64, background: Color) {
        let dpr = Self::device_pixel_ratio();
        self.canvas.set_width((width * dpr).round() as u32);
        self.canvas.set_height((height * dpr).round() as u32);
        if let Err(e) = self.context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            crate::log_warn!(LogComponent::Infrastructure("CanvasSurface"), "setTransform failed: {:?}", e);
        }
        self.context.set_global_alpha(1.0);
        self.fill_rect(0.0, 0.0, width, height, background);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(x, y, width, height);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle) {
        self.stroke_polyline(&[from, to], style);
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], style: &StrokeStyle) {
        let [(x0, y0), rest @ ..] = points else { return };
        if rest.is_empty() {
            return;
        }
        self.apply_stroke(style);
        self.context.begin_path();
        self.context.move_to(*x0, *y0);
        for (x, y) in rest {
            self.context.line_to(*x, *y);
        }
        self.context.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.context.set_font(&style.css_font());
        self.context.set_fill_style_str(&style.color.to_css());
        if let Err(e) = self.context.fill_text(text, x, y) {
            crate::log_warn!(LogComponent::Infrastructure("CanvasSurface"), "fillText failed: {:?}", e);
        }
    }
}
