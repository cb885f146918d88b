use super::value_objects::{Side, TradeSide};
use serde::{Deserialize, Serialize};

/// One price level of the depth ladder. `total` is the cumulative notional
/// (`price * size`) from the best level down to this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub price: f64,
    pub size: u32,
    pub total: f64,
    pub side: Side,
}

impl OrderBookLevel {
    /// Fraction of the widest level this one's size covers, in `[0, 1]`.
    pub fn depth_share(&self, max_size: u32) -> f64 {
        if max_size == 0 {
            return 0.0;
        }
        (self.size as f64 / max_size as f64).min(1.0)
    }
}

/// Mock depth snapshot: asks ascending, bids descending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    pub asks: Vec<OrderBookLevel>,
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }

    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    /// Largest single-level size on either side; scales the depth bars.
    pub fn max_size(&self) -> u32 {
        self.asks.iter().chain(self.bids.iter()).map(|l| l.size).max().unwrap_or(0)
    }
}

/// A print on the recent-trades tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub price: f64,
    pub quantity: u32,
    pub seconds_ago: u32,
    pub side: TradeSide,
}
