use super::order_book::{OrderBook, OrderBookLevel, Trade};
use super::value_objects::{Side, TradeSide};
use super::{OHLCV, Price, PricePoint, PriceSeries, Timestamp, Volume};
use crate::domain::errors::{AppError, ValidationResult};
use crate::domain::logging::LogComponent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounds of the random walk behind the mock series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    /// open = previous close + U(-open_jitter, open_jitter)
    pub open_jitter: f64,
    /// close = open + U(-close_jitter, close_jitter)
    pub close_jitter: f64,
    /// high/low extend the body by U(0, wick_margin)
    pub wick_margin: f64,
    pub volume_floor: u32,
    pub volume_span: u32,
}

impl Default for WalkBounds {
    fn default() -> Self {
        Self { open_jitter: 2.0, close_jitter: 5.0, wick_margin: 3.0, volume_floor: 200, volume_span: 1000 }
    }
}

pub const DEPTH_LEVELS: usize = 6;
pub const DEPTH_STEP: f64 = 0.5;
pub const TAPE_LENGTH: usize = 6;

/// Builds every piece of mock market data from one explicit random source,
/// so a fixed seed reproduces the exact same series, book and tape.
pub struct MockMarketGenerator<R: Rng = StdRng> {
    rng: R,
    bounds: WalkBounds,
}

impl MockMarketGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MockMarketGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, bounds: WalkBounds::default() }
    }

    pub fn with_bounds(mut self, bounds: WalkBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// `count` samples spaced `interval_secs` apart, the last one at `end_time`.
    pub fn generate_series(
        &mut self,
        count: usize,
        interval_secs: u64,
        start_price: f64,
        end_time: Timestamp,
    ) -> ValidationResult<PriceSeries> {
        if count == 0 {
            return Err(AppError::ValidationError("series needs at least one point".to_string()));
        }
        if interval_secs == 0 {
            return Err(AppError::ValidationError("interval must be positive".to_string()));
        }
        let span = (count as u64 - 1)
            .checked_mul(interval_secs)
            .filter(|span| *span <= end_time.value())
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "{} points of {}s do not fit before t={}",
                    count,
                    interval_secs,
                    end_time.value()
                ))
            })?;
        let first_ts = end_time.value() - span;

        let b = self.bounds;
        let mut points = Vec::with_capacity(count);
        let mut prev_close = start_price;
        for i in 0..count {
            let open = prev_close + self.symmetric(b.open_jitter);
            let close = open + self.symmetric(b.close_jitter);
            let high = open.max(close) + self.upto(b.wick_margin);
            let low = open.min(close) - self.upto(b.wick_margin);
            let volume = b.volume_floor as f64 + self.rng.random_range(0..b.volume_span.max(1)) as f64;

            points.push(PricePoint::new(
                Timestamp::from_secs(first_ts + i as u64 * interval_secs),
                OHLCV::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close), Volume::from(volume)),
            ));
            prev_close = close;
        }

        crate::log_debug!(
            LogComponent::Domain("MockMarket"),
            "📊 Generated {} points ({}s) from {:.2} to {:.2}",
            count,
            interval_secs,
            start_price,
            prev_close
        );

        Ok(PriceSeries::from_generated(points, interval_secs))
    }

    /// Depth ladder for one side, best level first, with cumulative totals.
    pub fn generate_depth(&mut self, base_price: f64, side: Side, levels: usize, step: f64) -> Vec<OrderBookLevel> {
        let mut rows: Vec<OrderBookLevel> = (0..levels)
            .map(|i| {
                let offset = i as f64 * step;
                let price = match side {
                    Side::Ask => base_price + offset,
                    Side::Bid => base_price - offset,
                };
                let size = self.rng.random_range(0..50u32) + 5;
                OrderBookLevel { price, size, total: 0.0, side }
            })
            .collect();

        match side {
            Side::Ask => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Side::Bid => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        let mut cumulative = 0.0;
        for row in rows.iter_mut() {
            cumulative += row.price * row.size as f64;
            row.total = cumulative;
        }
        rows
    }

    /// Asks start at the floor, bids half a dollar under it.
    pub fn generate_order_book(&mut self, floor_price: f64) -> OrderBook {
        OrderBook {
            asks: self.generate_depth(floor_price, Side::Ask, DEPTH_LEVELS, DEPTH_STEP),
            bids: self.generate_depth(floor_price - DEPTH_STEP, Side::Bid, DEPTH_LEVELS, DEPTH_STEP),
        }
    }

    /// Recent prints scattered within a dollar of `price`, newest first.
    pub fn generate_trades(&mut self, price: f64, count: usize) -> Vec<Trade> {
        (0..count)
            .map(|i| Trade {
                id: format!("{:016x}", self.rng.random::<u64>()),
                price: price + self.symmetric(1.0),
                quantity: self.rng.random_range(0..20u32) + 1,
                seconds_ago: i as u32 + 1,
                side: if self.rng.random_bool(0.5) { TradeSide::Buy } else { TradeSide::Sell },
            })
            .collect()
    }

    fn symmetric(&mut self, half_width: f64) -> f64 {
        if half_width <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-half_width..half_width)
    }

    fn upto(&mut self, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..max)
    }
}
