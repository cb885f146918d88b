pub use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use crate::domain::errors::{AppError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;

/// Domain entity - one fixed-interval sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl PricePoint {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    pub fn open(&self) -> f64 {
        self.ohlcv.open.value()
    }

    pub fn high(&self) -> f64 {
        self.ohlcv.high.value()
    }

    pub fn low(&self) -> f64 {
        self.ohlcv.low.value()
    }

    pub fn close(&self) -> f64 {
        self.ohlcv.close.value()
    }

    pub fn volume(&self) -> f64 {
        self.ohlcv.volume.value()
    }

    /// Flat samples count as up.
    pub fn is_up(&self) -> bool {
        self.close() >= self.open()
    }

    pub fn body_top(&self) -> f64 {
        self.open().max(self.close())
    }

    pub fn body_bottom(&self) -> f64 {
        self.open().min(self.close())
    }
}

/// Domain entity - immutable, time-ascending, evenly spaced price history.
///
/// Points live behind an `Arc` so views and render passes can hold the
/// series cheaply; nothing ever writes to it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Arc<[PricePoint]>,
    interval_secs: u64,
}

impl PriceSeries {
    /// Series with no samples. Renders as background only.
    pub fn empty(interval_secs: u64) -> Self {
        Self { points: Arc::from(Vec::new()), interval_secs }
    }

    /// Build a series from caller-provided points.
    ///
    /// Rejects invalid OHLC values, non-increasing timestamps and uneven
    /// spacing. A single point is accepted with the given interval.
    pub fn from_points(points: Vec<PricePoint>, interval_secs: u64) -> ValidationResult<Self> {
        if interval_secs == 0 {
            return Err(AppError::ValidationError("interval must be positive".to_string()));
        }
        if let Some(bad) = points.iter().position(|p| !p.ohlcv.is_valid()) {
            return Err(AppError::ValidationError(format!("invalid OHLCV at index {}", bad)));
        }
        for (i, pair) in points.windows(2).enumerate() {
            let (prev, next) = (pair[0].timestamp.value(), pair[1].timestamp.value());
            if next <= prev {
                return Err(AppError::ValidationError(format!(
                    "timestamps must be strictly increasing (index {})",
                    i + 1
                )));
            }
            if next - prev != interval_secs {
                return Err(AppError::ValidationError(format!(
                    "expected spacing {}s at index {}, got {}s",
                    interval_secs,
                    i + 1,
                    next - prev
                )));
            }
        }
        Ok(Self { points: Arc::from(points), interval_secs })
    }

    /// Trusted constructor for generators that uphold the invariants.
    pub(crate) fn from_generated(points: Vec<PricePoint>, interval_secs: u64) -> Self {
        debug_assert!(points.windows(2).all(|w| w[1].timestamp.value() - w[0].timestamp.value() == interval_secs));
        Self { points: Arc::from(points), interval_secs }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(PricePoint::close)
    }

    /// Slice clamped to the series bounds.
    pub fn slice(&self, range: Range<usize>) -> &[PricePoint] {
        let end = range.end.min(self.points.len());
        let start = range.start.min(end);
        &self.points[start..end]
    }

    /// Lowest low and highest high over `range`, `None` when the slice is empty.
    pub fn price_range(&self, range: Range<usize>) -> Option<(f64, f64)> {
        let slice = self.slice(range);
        if slice.is_empty() {
            return None;
        }
        let (min, max) = slice.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.low()), hi.max(p.high()))
        });
        Some((min, max))
    }

    /// Largest volume over `range`, `0.0` when the slice is empty.
    pub fn max_volume(&self, range: Range<usize>) -> f64 {
        self.slice(range).iter().map(PricePoint::volume).fold(0.0, f64::max)
    }
}
