use futures::executor::block_on;
use kline_chart_wasm::application::MarketIntelService;
use kline_chart_wasm::domain::errors::AppError;
use kline_chart_wasm::domain::market_data::AssetName;
use kline_chart_wasm::domain::market_intel::{MARKET_INTEL_UNAVAILABLE, MarketSnapshot, TextGenerator};
use std::cell::RefCell;
use std::rc::Rc;

/// Replays a fixed outcome and remembers the prompt it was given.
struct Scripted {
    outcome: Result<String, AppError>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn new(outcome: Result<String, AppError>) -> Self {
        Self { outcome, prompts: Rc::default() }
    }
}

impl TextGenerator for Scripted {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.outcome.clone()
    }
}

fn snapshot() -> MarketSnapshot {
    MarketSnapshot::new(AssetName::new("Pokémon 151 Japanese Booster Box").unwrap(), 185.0, 2.4)
}

#[test]
fn provider_failure_yields_the_fixed_notice() {
    let service = MarketIntelService::new(Scripted::new(Err(AppError::NetworkError("offline".to_string()))));
    let text = block_on(service.analyze(&snapshot()));
    assert_eq!(text, MARKET_INTEL_UNAVAILABLE);
    assert_eq!(text, "MARKET INTEL CURRENTLY UNAVAILABLE.");
}

#[test]
fn provider_text_is_passed_through() {
    let generator = Scripted::new(Ok("Strong buy.".to_string()));
    let service = MarketIntelService::new(generator);
    assert_eq!(block_on(service.analyze(&snapshot())), "Strong buy.");
}

#[test]
fn prompt_carries_asset_price_and_change() {
    let prompt = snapshot().prompt();
    assert!(prompt.contains("Pokémon 151 Japanese Booster Box"));
    assert!(prompt.contains("Last Sale: $185"));
    assert!(prompt.contains("24h Price Change: 2.4%"));
    assert!(prompt.contains("Buyer's Intel"));
}

#[test]
fn generator_receives_the_snapshot_prompt() {
    let generator = Scripted::new(Ok("ok".to_string()));
    let prompts = Rc::clone(&generator.prompts);
    let service = MarketIntelService::new(generator);

    block_on(service.analyze(&snapshot()));
    assert_eq!(prompts.borrow().as_slice(), [snapshot().prompt()]);
}

#[test]
fn blank_asset_names_are_rejected() {
    assert!(AssetName::new("   ").is_err());
}
