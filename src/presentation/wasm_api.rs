use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{ChartService, MarketFeed, MarketIntelService};
use crate::config::DashboardConfig;
use crate::domain::chart::PointerInput;
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market_data::{AssetName, Timestamp};
use crate::domain::market_intel::{MARKET_INTEL_UNAVAILABLE, MarketSnapshot};
use crate::infrastructure::http::GeminiClient;
use crate::infrastructure::rendering::CanvasSurface;

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Kline chart bound to a `<canvas>`; thin bridge to [`ChartService`].
///
/// Every input method redraws the canvas.
#[wasm_bindgen]
pub struct KlineChartApi {
    service: ChartService,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl KlineChartApi {
    /// `config_json` may hold any subset of the dashboard config.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, price_hint: Option<f64>, config_json: Option<String>) -> Result<KlineChartApi, JsValue> {
        let config = match config_json {
            Some(json) => DashboardConfig::from_json(&json).map_err(to_js)?,
            None => DashboardConfig::default(),
        };
        let surface = CanvasSurface::from_element_id(canvas_id).map_err(to_js)?;
        let now = Timestamp::from_secs(get_time_provider().current_unix_seconds());
        let service = ChartService::from_config(canvas_id, &config, price_hint, now).map_err(to_js)?;

        crate::log_info!(LogComponent::Presentation("KlineChartApi"), "bound to #{}", canvas_id);
        Ok(Self { service, surface })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.service.resize(width, height);
        self.render();
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.dispatch(PointerInput::Down { x, y });
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.dispatch(PointerInput::Move { x, y });
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.dispatch(PointerInput::Up);
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.dispatch(PointerInput::Leave);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.dispatch(PointerInput::Wheel { delta_y });
    }

    pub fn render(&mut self) {
        self.service.render(&mut self.surface);
    }

    /// Legend of the hovered (or newest) sample as a JS object, `null` when
    /// the series is empty.
    pub fn legend(&self) -> Result<JsValue, JsValue> {
        match self.service.legend() {
            Some(legend) => JsValue::from_serde(&legend).map_err(|e| to_js(e.into())),
            None => Ok(JsValue::NULL),
        }
    }

    fn dispatch(&mut self, input: PointerInput) {
        self.service.handle(input);
        self.render();
    }
}

/// Mock order book and trades tape around `floor_price`.
#[wasm_bindgen(js_name = marketDepth)]
pub fn market_depth(floor_price: f64, seed: Option<u64>) -> Result<JsValue, JsValue> {
    let seed = seed.unwrap_or_else(|| get_time_provider().current_timestamp());
    let depth = MarketFeed::seeded(seed).depth(floor_price);
    JsValue::from_serde(&depth).map_err(|e| to_js(e.into()))
}

/// Resolves to the intel report, or to the unavailable notice. Never rejects.
#[wasm_bindgen(js_name = analyzeMarket)]
pub fn analyze_market(api_key: String, asset: String, last_price: f64, change_24h: f64) -> Promise {
    future_to_promise(async move {
        let Ok(asset) = AssetName::new(asset) else {
            crate::log_warn!(LogComponent::Presentation("analyzeMarket"), "empty asset name");
            return Ok(JsValue::from_str(MARKET_INTEL_UNAVAILABLE));
        };
        let snapshot = MarketSnapshot::new(asset, last_price, change_24h);
        let service = MarketIntelService::new(GeminiClient::new(api_key, Default::default()));
        Ok(JsValue::from_str(&service.analyze(&snapshot).await))
    })
}
