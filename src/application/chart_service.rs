use crate::config::DashboardConfig;
use crate::domain::chart::{KlineChart, PointerInput};
use crate::domain::errors::ValidationResult;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market_data::services::MockMarketGenerator;
use crate::domain::market_data::{PriceSeries, Timestamp};
use crate::infrastructure::rendering::{ChartRenderer, Legend, RenderSurface};

/// Application service driving one kline chart: builds the mock series,
/// routes pointer input into the aggregate and renders on demand.
pub struct ChartService {
    chart: KlineChart,
    renderer: ChartRenderer,
}

impl ChartService {
    pub fn new(chart: KlineChart) -> Self {
        Self { chart, renderer: ChartRenderer::default() }
    }

    /// Chart over a freshly generated series ending at `now`.
    ///
    /// A configured seed makes the series reproducible; otherwise `now` seeds
    /// the generator.
    pub fn from_config(
        id: impl Into<String>,
        config: &DashboardConfig,
        price_hint: Option<f64>,
        now: Timestamp,
    ) -> ValidationResult<Self> {
        let series = generate_series(config, price_hint, now)?;
        let chart = KlineChart::new(id, series, config.view.view_state(), config.layout);
        crate::log_info!(
            LogComponent::Application("ChartService"),
            "chart {} ready with {} points",
            chart.id,
            chart.series().len()
        );
        Ok(Self::new(chart))
    }

    pub fn chart(&self) -> &KlineChart {
        &self.chart
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    pub fn handle(&mut self, input: PointerInput) {
        crate::log_trace!(LogComponent::Application("ChartService"), "input {:?}", input);
        self.chart.apply(input);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.chart.resize(width, height);
    }

    pub fn set_series(&mut self, series: PriceSeries) {
        self.chart.set_series(series);
    }

    /// Redraw using the registered clock's UTC offset for time labels.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) {
        self.render_with_offset(surface, get_time_provider().utc_offset_minutes());
    }

    pub fn render_with_offset<S: RenderSurface>(&self, surface: &mut S, utc_offset_minutes: i32) {
        self.renderer.render(&self.chart, surface, utc_offset_minutes);
    }

    pub fn legend(&self) -> Option<Legend> {
        Legend::for_chart(&self.chart, self.renderer.palette())
    }
}

/// Series described by `config.series`, last sample at `now`.
pub fn generate_series(config: &DashboardConfig, price_hint: Option<f64>, now: Timestamp) -> ValidationResult<PriceSeries> {
    let series_cfg = &config.series;
    let seed = series_cfg.seed.unwrap_or(now.value());
    MockMarketGenerator::seeded(seed).generate_series(
        series_cfg.count,
        series_cfg.interval.duration_secs(),
        series_cfg.start_price_for(price_hint),
        now,
    )
}
