use crate::domain::market_data::MaPeriod;
use serde::{Deserialize, Serialize};

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS colour string for the 2D canvas API.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.to_hex())
        } else {
            let hex = self.to_hex();
            format!(
                "rgba({}, {}, {}, {})",
                (hex >> 16) & 0xFF,
                (hex >> 8) & 0xFF,
                hex & 0xFF,
                self.a.max(0.0)
            )
        }
    }

    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Fixed chart colours. Up is teal and down is red so the two stay apart
/// under the common forms of colour blindness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub background: Color,
    pub grid: Color,
    pub up: Color,
    pub down: Color,
    pub text: Color,
    pub crosshair: Color,
    pub label_background: Color,
    pub label_text: Color,
    pub ma5: Color,
    pub ma10: Color,
    pub ma20: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x0b0e11),
            grid: Color::from_hex(0x1e222d),
            up: Color::from_hex(0x089981),
            down: Color::from_hex(0xf23645),
            text: Color::from_hex(0x707a8a),
            crosshair: Color::from_hex(0x758696),
            label_background: Color::from_hex(0x1e222d),
            label_text: Color::WHITE,
            ma5: Color::WHITE,
            ma10: Color::from_hex(0xeab308),
            ma20: Color::from_hex(0x60a5fa),
        }
    }
}

impl ChartPalette {
    pub fn ma_color(&self, kind: MaPeriod) -> Color {
        match kind {
            MaPeriod::Ma5 => self.ma5,
            MaPeriod::Ma10 => self.ma10,
            MaPeriod::Ma20 => self.ma20,
        }
    }
}

/// Gutters reserved around the plot for the price and time axes, in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub right_gutter: f64,
    pub bottom_gutter: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { right_gutter: 60.0, bottom_gutter: 25.0 }
    }
}

/// Value Object - the candle/volume drawing area, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    /// Container size minus the axis gutters, never negative.
    pub fn from_container(width: f64, height: f64, layout: &ChartLayout) -> Self {
        Self::new(width - layout.right_gutter, height - layout.bottom_gutter)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }
}
