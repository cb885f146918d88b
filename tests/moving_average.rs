use kline_chart_wasm::domain::market_data::services::MockMarketGenerator;
use kline_chart_wasm::domain::market_data::{MaPeriod, MovingAverage, MovingAverageEngine, Timestamp, moving_average};
use quickcheck_macros::quickcheck;

fn series(count: usize) -> kline_chart_wasm::domain::market_data::PriceSeries {
    MockMarketGenerator::seeded(5)
        .generate_series(count, 300, 165.0, Timestamp::from_secs(1_699_920_000))
        .unwrap()
}

#[test]
fn period_longer_than_series_is_all_undefined() {
    let ma = MovingAverage::compute(&series(10), 20);
    assert_eq!(ma.len(), 10);
    assert!(ma.values().iter().all(Option::is_none));
}

#[test]
fn zero_period_is_all_undefined() {
    assert_eq!(moving_average(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
}

#[test]
fn values_match_the_trailing_mean_of_closes() {
    let s = series(120);
    let closes: Vec<f64> = s.closes().collect();
    for kind in [MaPeriod::Ma5, MaPeriod::Ma10, MaPeriod::Ma20] {
        let k = kind.period();
        let ma = MovingAverage::compute(&s, k);
        for (i, value) in ma.values().iter().enumerate() {
            if i + 1 < k {
                assert!(value.is_none(), "MA{} defined at {}", k, i);
            } else {
                let expected = closes[i + 1 - k..=i].iter().sum::<f64>() / k as f64;
                assert!((value.unwrap() - expected).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn engine_keeps_the_three_lines_in_order() {
    let engine = MovingAverageEngine::compute(&series(30));
    let labels: Vec<String> = engine.lines().map(|(kind, _)| kind.label()).collect();
    assert_eq!(labels, ["MA(5)", "MA(10)", "MA(20)"]);
    assert_eq!(engine.line(MaPeriod::Ma20).unwrap().get(18), None);
    assert!(engine.line(MaPeriod::Ma20).unwrap().get(19).is_some());
}

#[quickcheck]
fn defined_exactly_from_period_minus_one(values: Vec<u16>, period: u8) -> bool {
    let closes: Vec<f64> = values.iter().map(|v| *v as f64).collect();
    let period = period as usize % 25;
    let ma = moving_average(&closes, period);
    if ma.len() != closes.len() {
        return false;
    }
    if period == 0 || period > closes.len() {
        return ma.iter().all(Option::is_none);
    }
    ma.iter().enumerate().all(|(i, v)| v.is_some() == (i + 1 >= period))
}
