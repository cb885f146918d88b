use super::PriceSeries;
use strum::{EnumIter, IntoEnumIterator};

/// Moving-average lines drawn on the kline chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MaPeriod {
    Ma5,
    Ma10,
    Ma20,
}

impl MaPeriod {
    pub fn period(&self) -> usize {
        match self {
            MaPeriod::Ma5 => 5,
            MaPeriod::Ma10 => 10,
            MaPeriod::Ma20 => 20,
        }
    }

    pub fn label(&self) -> String {
        format!("MA({})", self.period())
    }
}

/// Trailing mean of closes over `period` samples, aligned with the input.
///
/// Entry `i` is `None` for `i < period - 1`. A zero period or one longer than
/// the input yields all `None`.
pub fn moving_average(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || period > closes.len() {
        return out;
    }
    for i in (period - 1)..closes.len() {
        let sum: f64 = closes[i + 1 - period..=i].iter().sum();
        out[i] = Some(sum / period as f64);
    }
    out
}

/// One computed moving-average line.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverage {
    period: usize,
    values: Vec<Option<f64>>,
}

impl MovingAverage {
    pub fn compute(series: &PriceSeries, period: usize) -> Self {
        let closes: Vec<f64> = series.closes().collect();
        Self { period, values: moving_average(&closes, period) }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Holds MA5/MA10/MA20 for the installed series. Recomputed in full on every
/// `compute`; the series is static so there is no incremental path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovingAverageEngine {
    lines: Vec<(MaPeriod, MovingAverage)>,
}

impl MovingAverageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(series: &PriceSeries) -> Self {
        let lines = MaPeriod::iter()
            .map(|kind| (kind, MovingAverage::compute(series, kind.period())))
            .collect();
        Self { lines }
    }

    pub fn line(&self, kind: MaPeriod) -> Option<&MovingAverage> {
        self.lines.iter().find(|(k, _)| *k == kind).map(|(_, line)| line)
    }

    pub fn lines(&self) -> impl Iterator<Item = (MaPeriod, &MovingAverage)> {
        self.lines.iter().map(|(k, line)| (*k, line))
    }
}

#[cfg(test)]
mod tests {
    use super::moving_average;

    #[test]
    fn window_of_one_is_identity() {
        let closes = [1.0, 2.0, 3.5];
        let ma = moving_average(&closes, 1);
        assert_eq!(ma, vec![Some(1.0), Some(2.0), Some(3.5)]);
    }

    #[test]
    fn full_window_has_single_value() {
        let ma = moving_average(&[2.0, 4.0, 6.0], 3);
        assert_eq!(ma, vec![None, None, Some(4.0)]);
    }
}
