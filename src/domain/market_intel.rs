use crate::domain::errors::AppError;
use crate::domain::market_data::AssetName;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Shown instead of the report whenever the provider call fails.
pub const MARKET_INTEL_UNAVAILABLE: &str = "MARKET INTEL CURRENTLY UNAVAILABLE.";

/// The market figures the intel prompt is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub asset: AssetName,
    pub last_price: f64,
    pub change_24h: f64,
}

impl MarketSnapshot {
    pub fn new(asset: AssetName, last_price: f64, change_24h: f64) -> Self {
        Self { asset, last_price, change_24h }
    }

    pub fn prompt(&self) -> String {
        format!(
            r#"As the Sealed Flip AI "Market Scout", analyze the pricing for {asset}.

Current Stats:
- Last Sale: ${price}
- 24h Price Change: {change}%

Context:
Traditional eBay sellers charge $25-40 for shipping and local tax is often 8-10%.
On Sealed Flip, there is $0 shipping and deferred tax since it's an RWA transfer.

Provide a "Buyer's Intel" report for an e-commerce user:
1. Value Analysis: (Is this a good time to buy compared to historicals?)
2. Savings Insight: Calculate total savings vs traditional physical delivery.
3. Buy Recommendation: (e.g., "Highly Recommended for entry-level investors")

Format it as a clean, helpful guide for a casual collector or professional investor. Stay professional and encouraging."#,
            asset = self.asset,
            price = self.last_price,
            change = self.change_24h,
        )
    }
}

/// Seam to the text-completion provider. Single-threaded WASM callers only,
/// so the returned future carries no `Send` bound.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AppError>>;
}
