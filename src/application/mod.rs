pub mod chart_service;
pub mod market_feed;
pub mod market_intel;

pub use chart_service::ChartService;
pub use market_feed::{MarketDepth, MarketFeed};
pub use market_intel::MarketIntelService;
