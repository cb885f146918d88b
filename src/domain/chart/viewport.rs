use super::value_objects::PlotArea;
use crate::domain::market_data::PriceSeries;
use crate::view_state::ViewState;
use serde::Serialize;
use std::ops::Range;

/// Share of the plot height the visible price range is stretched over.
pub const PRICE_FILL_RATIO: f64 = 0.8;
/// Gap kept under the lowest low (and, by symmetry, above the highest high).
pub const PRICE_MARGIN_RATIO: f64 = 0.1;

/// Visible slice `[start, end)` of the series.
///
/// `anchor` is the index the right edge of the plot is aligned to. It equals
/// `end` except when the view is panned past the newest sample, where it runs
/// ahead of the series and leaves empty bars on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
    pub anchor: usize,
}

impl VisibleRange {
    pub fn compute(series_len: usize, visible_bar_count: usize, right_offset: f64) -> Self {
        let anchor = if right_offset.is_finite() {
            (series_len as f64 - right_offset.floor()).max(0.0) as usize
        } else {
            series_len
        };
        let end = anchor.min(series_len);
        let start = anchor.saturating_sub(visible_bar_count).min(end);
        Self { start, end, anchor }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Pixel -> sample resolution shared by hover handling and the crosshair label.
///
/// Inverse of [`ViewportTransform::index_to_x`]: distance from the right edge
/// in whole bars, counted back from the anchor. The slot nearest the gutter
/// belongs to the anchor itself, which never holds a sample.
pub fn resolve_index(x: f64, plot_width: f64, bar_width: f64, range: &VisibleRange) -> Option<usize> {
    if !(x.is_finite() && bar_width > 0.0) {
        return None;
    }
    let bars_from_anchor = ((plot_width - x) / bar_width).floor();
    let index = range.anchor as f64 - bars_from_anchor;
    if index < 0.0 {
        return None;
    }
    let index = index as usize;
    range.contains(index).then_some(index)
}

/// Per-frame mapping between samples/prices and plot pixels.
///
/// Built fresh for every redraw from the view, the series and the plot size;
/// never cached across state changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportTransform {
    pub plot: PlotArea,
    pub bar_width: f64,
    pub range: VisibleRange,
    pub min_low: f64,
    pub max_high: f64,
    vertical_scale: f64,
    margin: f64,
}

impl ViewportTransform {
    /// `None` when there is nothing to draw: zero-sized plot or empty slice.
    pub fn new(series: &PriceSeries, view: &ViewState, plot: PlotArea) -> Option<Self> {
        if plot.is_empty() || series.is_empty() {
            return None;
        }
        let range = view.visible_range(series.len(), plot.width);
        if range.is_empty() {
            return None;
        }
        let (min_low, max_high) = series.price_range(range.as_range())?;
        let span = max_high - min_low;
        let span = if span > 0.0 && span.is_finite() { span } else { 1.0 };

        Some(Self {
            plot,
            bar_width: view.bar_width,
            range,
            min_low,
            max_high,
            vertical_scale: plot.height * PRICE_FILL_RATIO / span,
            margin: plot.height * PRICE_MARGIN_RATIO,
        })
    }

    /// Bar centre; the anchor bar sits flush against the price gutter.
    pub fn index_to_x(&self, index: usize) -> f64 {
        self.plot.width - (self.range.anchor as f64 - index as f64) * self.bar_width - self.bar_width / 2.0
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        self.plot.height - ((price - self.min_low) * self.vertical_scale + self.margin)
    }

    pub fn y_to_price(&self, y: f64) -> f64 {
        (self.plot.height - y - self.margin) / self.vertical_scale + self.min_low
    }

    pub fn x_to_index(&self, x: f64) -> Option<usize> {
        resolve_index(x, self.plot.width, self.bar_width, &self.range)
    }

    /// Candle body width: 70% of the pitch, at least one pixel.
    pub fn body_width(&self) -> f64 {
        (self.bar_width * 0.7).max(1.0)
    }

    pub fn vertical_scale(&self) -> f64 {
        self.vertical_scale
    }
}
