use super::interaction::{CursorState, DragState, PointerInput};
use super::value_objects::{ChartLayout, PlotArea};
use super::viewport::{VisibleRange, ViewportTransform, resolve_index};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{MovingAverageEngine, PricePoint, PriceSeries};
use crate::view_state::ViewState;

/// Aggregate - one kline chart: the static series, its moving averages and
/// all mutable view/pointer state. Owned by exactly one view.
#[derive(Debug, Clone)]
pub struct KlineChart {
    pub id: String,
    series: PriceSeries,
    averages: MovingAverageEngine,
    view: ViewState,
    layout: ChartLayout,
    container: (f64, f64),
    drag: DragState,
    cursor: Option<CursorState>,
}

impl KlineChart {
    pub fn new(id: impl Into<String>, series: PriceSeries, view: ViewState, layout: ChartLayout) -> Self {
        let averages = MovingAverageEngine::compute(&series);
        Self {
            id: id.into(),
            series,
            averages,
            view,
            layout,
            container: (0.0, 0.0),
            drag: DragState::default(),
            cursor: None,
        }
    }

    /// Replace the series; moving averages are recomputed in full.
    pub fn set_series(&mut self, series: PriceSeries) {
        self.averages = MovingAverageEngine::compute(&series);
        self.series = series;
        self.cursor = None;
        crate::log_debug!(
            LogComponent::Domain("KlineChart"),
            "series installed on {}: {} points",
            self.id,
            self.series.len()
        );
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn averages(&self) -> &MovingAverageEngine {
        &self.averages
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn cursor(&self) -> Option<&CursorState> {
        self.cursor.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn container_size(&self) -> (f64, f64) {
        self.container
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.container = (clean(width), clean(height));
        self.refresh_hover();
    }

    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_container(self.container.0, self.container.1, &self.layout)
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.view.visible_range(self.series.len(), self.plot_area().width)
    }

    pub fn transform(&self) -> Option<ViewportTransform> {
        ViewportTransform::new(&self.series, &self.view, self.plot_area())
    }

    pub fn apply(&mut self, input: PointerInput) {
        match input {
            PointerInput::Down { x, y } => self.pointer_down(x, y),
            PointerInput::Move { x, y } => self.pointer_move(x, y),
            PointerInput::Up => self.pointer_up(),
            PointerInput::Leave => self.pointer_leave(),
            PointerInput::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    pub fn pointer_down(&mut self, x: f64, _y: f64) {
        self.drag.begin(x);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.plot_area().contains(x, y) {
            self.pointer_leave();
            return;
        }
        if let Some(delta) = self.drag.drag_to(x) {
            self.view.pan(delta);
        }
        let hovered = self.resolve(x);
        self.cursor = Some(CursorState { x, y, hovered });
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.end();
        self.cursor = None;
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.view.zoom_wheel(delta_y);
        self.refresh_hover();
    }

    pub fn hovered_point(&self) -> Option<&PricePoint> {
        self.cursor.and_then(|c| c.hovered).and_then(|i| self.series.get(i))
    }

    /// What the OHLCV legend shows: the hovered sample, else the newest one.
    pub fn legend_point(&self) -> Option<&PricePoint> {
        self.hovered_point().or_else(|| self.series.latest())
    }

    fn resolve(&self, x: f64) -> Option<usize> {
        let plot = self.plot_area();
        resolve_index(x, plot.width, self.view.bar_width, &self.visible_range())
    }

    /// Re-resolve the hovered sample after the mapping changed under a
    /// stationary pointer.
    fn refresh_hover(&mut self) {
        let Some(cursor) = self.cursor else { return };
        if self.plot_area().contains(cursor.x, cursor.y) {
            let hovered = self.resolve(cursor.x);
            self.cursor = Some(CursorState { hovered, ..cursor });
        } else {
            self.cursor = None;
        }
    }
}
