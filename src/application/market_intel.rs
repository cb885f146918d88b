use crate::domain::logging::LogComponent;
use crate::domain::market_intel::{MARKET_INTEL_UNAVAILABLE, MarketSnapshot, TextGenerator};

/// Produces the "Buyer's Intel" report for a snapshot.
pub struct MarketIntelService<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> MarketIntelService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Never fails: provider errors are logged and replaced by
    /// [`MARKET_INTEL_UNAVAILABLE`].
    pub async fn analyze(&self, snapshot: &MarketSnapshot) -> String {
        crate::log_info!(
            LogComponent::Application("MarketIntel"),
            "requesting intel for {} at {:.2}",
            snapshot.asset,
            snapshot.last_price
        );
        match self.generator.generate(&snapshot.prompt()).await {
            Ok(text) => text,
            Err(e) => {
                crate::log_error!(LogComponent::Application("MarketIntel"), "analysis failed: {}", e);
                MARKET_INTEL_UNAVAILABLE.to_string()
            }
        }
    }
}
