use crate::domain::chart::ChartLayout;
use crate::domain::errors::AppError;
use crate::domain::market_data::TimeInterval;
use crate::view_state::{MAX_BAR_WIDTH, MIN_BAR_WIDTH, MIN_RIGHT_OFFSET, ViewState, ZOOM_STEP};
use serde::Deserialize;

pub const DEFAULT_START_PRICE: f64 = 165.0;

/// Mock series parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub count: usize,
    pub interval: TimeInterval,
    pub start_price: f64,
    /// Fixed seed for reproducible data; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { count: 500, interval: TimeInterval::FiveMinutes, start_price: DEFAULT_START_PRICE, seed: None }
    }
}

impl SeriesConfig {
    /// A finite, positive price hint from the host overrides the default start.
    pub fn start_price_for(&self, price_hint: Option<f64>) -> f64 {
        match price_hint {
            Some(hint) if hint.is_finite() && hint > 0.0 => hint,
            _ => self.start_price,
        }
    }
}

/// Initial zoom/pan and the clamps applied to them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub initial_bar_width: f64,
    pub initial_right_offset: f64,
    pub min_bar_width: f64,
    pub max_bar_width: f64,
    pub min_right_offset: f64,
    pub zoom_step: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_bar_width: 10.0,
            initial_right_offset: 10.0,
            min_bar_width: MIN_BAR_WIDTH,
            max_bar_width: MAX_BAR_WIDTH,
            min_right_offset: MIN_RIGHT_OFFSET,
            zoom_step: ZOOM_STEP,
        }
    }
}

impl ViewConfig {
    pub fn view_state(&self) -> ViewState {
        ViewState::with_limits(
            self.initial_bar_width,
            self.initial_right_offset,
            self.min_bar_width,
            self.max_bar_width,
            self.min_right_offset,
            self.zoom_step,
        )
    }
}

/// Text-generation provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntelConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.6,
            top_p: 0.9,
        }
    }
}

/// Everything the dashboard reads at start-up. Any subset of fields may be
/// supplied as JSON; the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub series: SeriesConfig,
    pub layout: ChartLayout,
    pub view: ViewConfig,
    pub intel: IntelConfig,
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let fail = |msg: String| -> Result<(), AppError> { Err(AppError::ConfigError(msg)) };
        let v = &self.view;

        if self.series.count == 0 {
            return fail("series.count must be at least 1".to_string());
        }
        if !(self.series.start_price.is_finite() && self.series.start_price > 0.0) {
            return fail(format!("series.start_price must be positive, got {}", self.series.start_price));
        }
        if !(v.min_bar_width > 0.0 && v.min_bar_width <= v.max_bar_width) {
            return fail(format!(
                "view bar width bounds must satisfy 0 < min <= max, got [{}, {}]",
                v.min_bar_width, v.max_bar_width
            ));
        }
        if !(v.zoom_step > 0.0 && v.zoom_step < 1.0) {
            return fail(format!("view.zoom_step must be in (0, 1), got {}", v.zoom_step));
        }
        if !v.min_right_offset.is_finite() {
            return fail("view.min_right_offset must be finite".to_string());
        }
        let gutters = [self.layout.right_gutter, self.layout.bottom_gutter];
        if gutters.iter().any(|g| !(g.is_finite() && *g >= 0.0)) {
            return fail("layout gutters must be non-negative".to_string());
        }
        if self.intel.model.trim().is_empty() {
            return fail("intel.model must not be empty".to_string());
        }
        Ok(())
    }
}
