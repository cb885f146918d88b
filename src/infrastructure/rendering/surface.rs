use crate::domain::chart::Color;
use serde::Serialize;

/// Line style for strokes. `dash` is `[on, off]` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: Color,
    pub size_px: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn css_font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{}{}px JetBrains Mono, monospace", weight, self.size_px)
    }
}

/// Drawing backend the chart render pass writes into.
///
/// Coordinates are CSS pixels with the origin at the container's top-left.
pub trait RenderSurface {
    /// Reset the surface to `width x height` filled with `background`.
    fn begin_frame(&mut self, width: f64, height: f64, background: Color);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle);
    /// Connected path through `points`; fewer than two points draws nothing.
    fn stroke_polyline(&mut self, points: &[(f64, f64)], style: &StrokeStyle);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginFrame { width: f64, height: f64, background: Color },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Color },
    Line { from: (f64, f64), to: (f64, f64), style: StrokeStyle },
    Polyline { points: Vec<(f64, f64)>, style: StrokeStyle },
    Text { text: String, x: f64, y: f64, style: TextStyle },
}

/// In-memory surface that records every call; used for headless rendering
/// and to compare frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every label drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for DrawList {
    fn begin_frame(&mut self, width: f64, height: f64, background: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::BeginFrame { width, height, background });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), style: &StrokeStyle) {
        self.commands.push(DrawCommand::Line { from, to, style: *style });
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), style: *style });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, style: *style });
    }
}
