use crate::domain::market_data::services::{MockMarketGenerator, TAPE_LENGTH};
use crate::domain::market_data::{OrderBook, Trade};
use serde::Serialize;

/// Depth ladder plus recent prints for one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDepth {
    pub book: OrderBook,
    pub trades: Vec<Trade>,
}

/// Mock feed behind the order-book and trades panels.
pub struct MarketFeed {
    generator: MockMarketGenerator,
}

impl MarketFeed {
    pub fn seeded(seed: u64) -> Self {
        Self { generator: MockMarketGenerator::seeded(seed) }
    }

    pub fn order_book(&mut self, floor_price: f64) -> OrderBook {
        self.generator.generate_order_book(floor_price)
    }

    pub fn trades(&mut self, price: f64) -> Vec<Trade> {
        self.generator.generate_trades(price, TAPE_LENGTH)
    }

    pub fn depth(&mut self, floor_price: f64) -> MarketDepth {
        MarketDepth { book: self.order_book(floor_price), trades: self.trades(floor_price) }
    }
}
