use crate::domain::chart::viewport::VisibleRange;

pub const MIN_BAR_WIDTH: f64 = 2.0;
pub const MAX_BAR_WIDTH: f64 = 50.0;
/// Panning may reveal at most this many empty bars past the newest sample.
pub const MIN_RIGHT_OFFSET: f64 = -5.0;
pub const ZOOM_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Wider bars, fewer samples on screen.
    In,
    /// Narrower bars, more samples on screen.
    Out,
}

impl ZoomDirection {
    /// Wheel up (negative delta) zooms in.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { ZoomDirection::In } else { ZoomDirection::Out }
    }
}

/// View parameters controlling zoom (`bar_width`) and pan (`right_offset`).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub bar_width: f64,
    /// Bars (fractional) the right edge is shifted back from the newest sample.
    pub right_offset: f64,
    pub min_bar_width: f64,
    pub max_bar_width: f64,
    pub min_right_offset: f64,
    pub zoom_step: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(10.0, 10.0)
    }
}

impl ViewState {
    pub fn new(bar_width: f64, right_offset: f64) -> Self {
        Self::with_limits(bar_width, right_offset, MIN_BAR_WIDTH, MAX_BAR_WIDTH, MIN_RIGHT_OFFSET, ZOOM_STEP)
    }

    pub fn with_limits(
        bar_width: f64,
        right_offset: f64,
        min_bar_width: f64,
        max_bar_width: f64,
        min_right_offset: f64,
        zoom_step: f64,
    ) -> Self {
        // bar_width divides pixel deltas, so the floor must stay positive
        let lo = min_bar_width.min(max_bar_width).max(0.1);
        let hi = max_bar_width.max(min_bar_width).max(lo);
        let mut view = Self {
            bar_width,
            right_offset,
            min_bar_width: lo,
            max_bar_width: hi,
            min_right_offset,
            zoom_step: zoom_step.clamp(0.0, 0.9),
        };
        view.bar_width = view.clamp_bar_width(bar_width);
        view.right_offset = view.clamp_right_offset(right_offset);
        view
    }

    /// Drag by `delta_px`; dragging right moves the view back in history.
    pub fn pan(&mut self, delta_px: f64) {
        if !delta_px.is_finite() {
            return;
        }
        self.right_offset = self.clamp_right_offset(self.right_offset + delta_px / self.bar_width);
    }

    /// One wheel notch. Anchored at the right edge: the sample under the
    /// pointer is not kept in place.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => 1.0 + self.zoom_step,
            ZoomDirection::Out => 1.0 - self.zoom_step,
        };
        self.bar_width = self.clamp_bar_width(self.bar_width * factor);
    }

    pub fn zoom_wheel(&mut self, delta_y: f64) {
        self.zoom(ZoomDirection::from_wheel_delta(delta_y));
    }

    pub fn visible_bar_count(&self, plot_width: f64) -> usize {
        if plot_width <= 0.0 {
            return 0;
        }
        (plot_width / self.bar_width).ceil() as usize
    }

    /// Visible candle range derived from view parameters.
    pub fn visible_range(&self, series_len: usize, plot_width: f64) -> VisibleRange {
        VisibleRange::compute(series_len, self.visible_bar_count(plot_width), self.right_offset)
    }

    fn clamp_bar_width(&self, value: f64) -> f64 {
        if value.is_finite() { value.clamp(self.min_bar_width, self.max_bar_width) } else { self.min_bar_width }
    }

    fn clamp_right_offset(&self, value: f64) -> f64 {
        if value.is_finite() { value.max(self.min_right_offset) } else { self.min_right_offset }
    }
}
