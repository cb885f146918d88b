use super::surface::{RenderSurface, StrokeStyle, TextStyle};
use crate::domain::chart::{ChartPalette, Color, CursorState, KlineChart, ViewportTransform};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{MovingAverage, PricePoint, PriceSeries};
use crate::time_utils::{format_price, format_time_label};

/// Horizontal grid intervals; one more line than steps is drawn.
pub const GRID_STEPS: usize = 6;
/// Vertical grid lines and time labels are placed every this many bars.
pub const TIME_LABEL_EVERY: usize = 20;
/// Volume bars use at most this share of the plot height.
pub const VOLUME_HEIGHT_RATIO: f64 = 0.15;
pub const VOLUME_ALPHA: f32 = 0.3;

const GRID_DASH: [f64; 2] = [4.0, 4.0];
const CROSSHAIR_DASH: [f64; 2] = [6.0, 6.0];
const LABEL_HEIGHT: f64 = 18.0;
const FONT_SIZE: f64 = 10.0;

/// Pixel geometry of one visible bar.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarGeometry {
    x: f64,
    high_y: f64,
    low_y: f64,
    body_top: f64,
    body_height: f64,
    volume_height: f64,
    up: bool,
}

impl BarGeometry {
    fn compute(point: &PricePoint, index: usize, t: &ViewportTransform, max_volume: f64) -> Self {
        let body_top = t.price_to_y(point.body_top());
        let body_bottom = t.price_to_y(point.body_bottom());
        let volume_height = if max_volume > 0.0 {
            point.volume() / max_volume * t.plot.height * VOLUME_HEIGHT_RATIO
        } else {
            0.0
        };
        Self {
            x: t.index_to_x(index),
            high_y: t.price_to_y(point.high()),
            low_y: t.price_to_y(point.low()),
            body_top,
            body_height: (body_bottom - body_top).max(1.0),
            volume_height,
            up: point.is_up(),
        }
    }
}

/// Draws a [`KlineChart`] into any [`RenderSurface`].
///
/// Stateless between frames: the same chart state always produces the same
/// command sequence.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    palette: ChartPalette,
}

impl ChartRenderer {
    pub fn new(palette: ChartPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ChartPalette {
        &self.palette
    }

    /// Full redraw. `utc_offset_minutes` is applied to the time-axis labels.
    pub fn render<S: RenderSurface>(&self, chart: &KlineChart, surface: &mut S, utc_offset_minutes: i32) {
        let (width, height) = chart.container_size();
        surface.begin_frame(width, height, self.palette.background);

        let Some(t) = chart.transform() else {
            crate::log_trace!(LogComponent::Infrastructure("ChartRenderer"), "nothing visible on {}", chart.id);
            return;
        };
        let series = chart.series();
        let bars = self.bar_geometry(series, &t);

        self.draw_grid(surface, &t);
        self.draw_candles(surface, &t, &bars);
        self.draw_volume(surface, &t, &bars);
        for (kind, line) in chart.averages().lines() {
            self.draw_moving_average(surface, &t, line, self.palette.ma_color(kind));
        }
        if let Some(last) = series.latest() {
            self.draw_last_price(surface, &t, last.close(), chart.layout().right_gutter);
        }
        if let Some(cursor) = chart.cursor() {
            self.draw_crosshair(surface, &t, cursor, series, chart.layout().right_gutter, utc_offset_minutes);
        }
        self.draw_time_labels(surface, &t, series, utc_offset_minutes);
    }

    fn text(&self, color: Color, bold: bool) -> TextStyle {
        TextStyle { color, size_px: FONT_SIZE, bold }
    }

    #[cfg(not(feature = "parallel"))]
    fn bar_geometry(&self, series: &PriceSeries, t: &ViewportTransform) -> Vec<BarGeometry> {
        let max_volume = series.max_volume(t.range.as_range());
        series
            .slice(t.range.as_range())
            .iter()
            .enumerate()
            .map(|(offset, point)| BarGeometry::compute(point, t.range.start + offset, t, max_volume))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn bar_geometry(&self, series: &PriceSeries, t: &ViewportTransform) -> Vec<BarGeometry> {
        use rayon::prelude::*;

        let max_volume = series.max_volume(t.range.as_range());
        series
            .slice(t.range.as_range())
            .par_iter()
            .enumerate()
            .map(|(offset, point)| BarGeometry::compute(point, t.range.start + offset, t, max_volume))
            .collect()
    }

    fn draw_grid<S: RenderSurface>(&self, surface: &mut S, t: &ViewportTransform) {
        let style = StrokeStyle::dashed(self.palette.grid, 0.5, GRID_DASH[0], GRID_DASH[1]);
        let label = self.text(self.palette.text, false);
        let plot = t.plot;

        for step in 0..=GRID_STEPS {
            let y = plot.height / GRID_STEPS as f64 * step as f64;
            surface.stroke_line((0.0, y), (plot.width, y), &style);
            surface.fill_text(&format_price(t.y_to_price(y)), plot.width + 5.0, y + 4.0, &label);
        }
        for index in t.range.as_range().step_by(TIME_LABEL_EVERY) {
            let x = t.index_to_x(index);
            surface.stroke_line((x, 0.0), (x, plot.height), &style);
        }
    }

    fn draw_candles<S: RenderSurface>(&self, surface: &mut S, t: &ViewportTransform, bars: &[BarGeometry]) {
        let body_width = t.body_width();
        for bar in bars {
            let color = if bar.up { self.palette.up } else { self.palette.down };
            surface.stroke_line((bar.x, bar.high_y), (bar.x, bar.low_y), &StrokeStyle::solid(color, 1.0));
            surface.fill_rect(bar.x - body_width / 2.0, bar.body_top, body_width, bar.body_height, color);
        }
    }

    fn draw_volume<S: RenderSurface>(&self, surface: &mut S, t: &ViewportTransform, bars: &[BarGeometry]) {
        let body_width = t.body_width();
        for bar in bars.iter().filter(|b| b.volume_height > 0.0) {
            let color = if bar.up { self.palette.up } else { self.palette.down };
            surface.fill_rect(
                bar.x - body_width / 2.0,
                t.plot.height - bar.volume_height,
                body_width,
                bar.volume_height,
                color.with_alpha(VOLUME_ALPHA),
            );
        }
    }

    /// One polyline per contiguous run of defined values.
    fn draw_moving_average<S: RenderSurface>(
        &self,
        surface: &mut S,
        t: &ViewportTransform,
        line: &MovingAverage,
        color: Color,
    ) {
        let style = StrokeStyle::solid(color, 1.0);
        let mut run: Vec<(f64, f64)> = Vec::new();
        for index in t.range.as_range() {
            match line.get(index) {
                Some(value) => run.push((t.index_to_x(index), t.price_to_y(value))),
                None => {
                    surface.stroke_polyline(&run, &style);
                    run.clear();
                }
            }
        }
        surface.stroke_polyline(&run, &style);
    }

    fn draw_last_price<S: RenderSurface>(&self, surface: &mut S, t: &ViewportTransform, close: f64, gutter: f64) {
        let y = t.price_to_y(close);
        if !(y > 0.0 && y < t.plot.height) {
            return;
        }
        let style = StrokeStyle::dashed(self.palette.down, 1.0, GRID_DASH[0], GRID_DASH[1]);
        surface.stroke_line((0.0, y), (t.plot.width, y), &style);
        surface.fill_rect(t.plot.width, y - LABEL_HEIGHT / 2.0, gutter, LABEL_HEIGHT, self.palette.down);
        surface.fill_text(&format_price(close), t.plot.width + 5.0, y + 4.0, &self.text(self.palette.label_text, true));
    }

    fn draw_crosshair<S: RenderSurface>(
        &self,
        surface: &mut S,
        t: &ViewportTransform,
        cursor: &CursorState,
        series: &PriceSeries,
        gutter: f64,
        utc_offset_minutes: i32,
    ) {
        let plot = t.plot;
        let style = StrokeStyle::dashed(self.palette.crosshair, 0.8, CROSSHAIR_DASH[0], CROSSHAIR_DASH[1]);
        let label = self.text(self.palette.label_text, false);

        surface.stroke_line((cursor.x, 0.0), (cursor.x, plot.height), &style);
        surface.stroke_line((0.0, cursor.y), (plot.width, cursor.y), &style);

        surface.fill_rect(plot.width, cursor.y - LABEL_HEIGHT / 2.0, gutter, LABEL_HEIGHT, self.palette.label_background);
        surface.fill_text(&format_price(t.y_to_price(cursor.y)), plot.width + 5.0, cursor.y + 4.0, &label);

        if let Some(point) = cursor.hovered.and_then(|i| series.get(i)) {
            let time = format_time_label(point.timestamp.value(), utc_offset_minutes);
            surface.fill_rect(cursor.x - 20.0, plot.height, 40.0, 20.0, self.palette.label_background);
            surface.fill_text(&time, cursor.x - 15.0, plot.height + 14.0, &label);
        }
    }

    fn draw_time_labels<S: RenderSurface>(
        &self,
        surface: &mut S,
        t: &ViewportTransform,
        series: &PriceSeries,
        utc_offset_minutes: i32,
    ) {
        let label = self.text(self.palette.text, false);
        for index in t.range.as_range().step_by(TIME_LABEL_EVERY) {
            let Some(point) = series.get(index) else { continue };
            let text = format_time_label(point.timestamp.value(), utc_offset_minutes);
            surface.fill_text(&text, t.index_to_x(index) - 15.0, t.plot.height + 15.0, &label);
        }
    }
}
