use kline_chart_wasm::domain::chart::{PlotArea, ViewportTransform};
use kline_chart_wasm::domain::market_data::services::MockMarketGenerator;
use kline_chart_wasm::domain::market_data::{OHLCV, Price, PricePoint, PriceSeries, Timestamp, Volume};
use kline_chart_wasm::view_state::ViewState;
use quickcheck_macros::quickcheck;

const PLOT: PlotArea = PlotArea { width: 1000.0, height: 400.0 };

fn series() -> PriceSeries {
    MockMarketGenerator::seeded(9)
        .generate_series(500, 300, 165.0, Timestamp::from_secs(1_699_920_000))
        .unwrap()
}

fn flat(count: u64) -> PriceSeries {
    let points = (0..count)
        .map(|i| {
            PricePoint::new(
                Timestamp::from_secs(i * 60),
                OHLCV::new(Price::from(5.0), Price::from(5.0), Price::from(5.0), Price::from(5.0), Volume::from(1.0)),
            )
        })
        .collect();
    PriceSeries::from_points(points, 60).unwrap()
}

#[test]
fn visible_extremes_map_to_the_price_margins() {
    let t = ViewportTransform::new(&series(), &ViewState::default(), PLOT).unwrap();

    assert!((t.price_to_y(t.min_low) - 360.0).abs() < 1e-9);
    assert!((t.price_to_y(t.max_high) - 40.0).abs() < 1e-9);
}

#[test]
fn flat_series_uses_unit_span() {
    let t = ViewportTransform::new(&flat(50), &ViewState::default(), PLOT).unwrap();

    assert_eq!(t.vertical_scale(), 320.0);
    let y = t.price_to_y(5.0);
    assert!(y.is_finite());
    assert_eq!(y, 360.0);
}

#[test]
fn nothing_to_draw_yields_none() {
    let view = ViewState::default();
    assert!(ViewportTransform::new(&PriceSeries::empty(60), &view, PLOT).is_none());
    assert!(ViewportTransform::new(&series(), &view, PlotArea::new(0.0, 400.0)).is_none());
    assert!(ViewportTransform::new(&series(), &ViewState::new(10.0, 900.0), PLOT).is_none());
}

#[test]
fn newest_visible_bar_sits_one_and_a_half_bars_from_the_gutter() {
    let t = ViewportTransform::new(&series(), &ViewState::default(), PLOT).unwrap();
    assert_eq!(t.range.end, 490);
    assert_eq!(t.index_to_x(489), 985.0);
    assert_eq!(t.body_width(), 7.0);
}

#[test]
fn bar_centres_resolve_back_to_their_index() {
    let t = ViewportTransform::new(&series(), &ViewState::default(), PLOT).unwrap();
    for i in t.range.as_range() {
        assert_eq!(t.x_to_index(t.index_to_x(i)), Some(i));
    }
    assert_eq!(t.x_to_index(995.0), None);
}

#[quickcheck]
fn y_round_trips_through_price(y: u16) -> bool {
    let t = ViewportTransform::new(&series(), &ViewState::default(), PLOT).unwrap();
    let y = (y % 400) as f64;
    (t.price_to_y(t.y_to_price(y)) - y).abs() < 1e-6
}

#[quickcheck]
fn visible_prices_round_trip_through_y(frac: u16) -> bool {
    let t = ViewportTransform::new(&series(), &ViewState::default(), PLOT).unwrap();
    let p = t.min_low + (frac as f64 / u16::MAX as f64) * (t.max_high - t.min_low);
    (t.y_to_price(t.price_to_y(p)) - p).abs() < 1e-6
}
