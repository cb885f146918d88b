use kline_chart_wasm::domain::chart::{ChartLayout, KlineChart, PointerInput};
use kline_chart_wasm::domain::market_data::services::MockMarketGenerator;
use kline_chart_wasm::domain::market_data::Timestamp;
use kline_chart_wasm::view_state::ViewState;

/// 500 bars, container 1060x425 so the plot is 1000x400 and 490 is the anchor.
fn chart() -> KlineChart {
    let series = MockMarketGenerator::seeded(21)
        .generate_series(500, 300, 165.0, Timestamp::from_secs(1_699_920_000))
        .unwrap();
    let mut chart = KlineChart::new("test", series, ViewState::default(), ChartLayout::default());
    chart.resize(1060.0, 425.0);
    chart
}

#[test]
fn newest_visible_bar_centre_resolves_to_it() {
    let mut chart = chart();
    let x = chart.transform().unwrap().index_to_x(489);
    chart.apply(PointerInput::Move { x, y: 200.0 });

    let cursor = chart.cursor().unwrap();
    assert_eq!(cursor.hovered, Some(489));
    assert_eq!(chart.hovered_point(), chart.series().get(489));
}

#[test]
fn slot_next_to_the_gutter_has_no_sample() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 995.0, y: 200.0 });
    assert!(chart.cursor().is_some());
    assert_eq!(chart.cursor().unwrap().hovered, None);
}

#[test]
fn leaving_the_plot_clears_the_cursor() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    assert!(chart.cursor().is_some());

    chart.apply(PointerInput::Move { x: 1010.0, y: 200.0 });
    assert!(chart.cursor().is_none());

    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    chart.apply(PointerInput::Move { x: 500.0, y: 410.0 });
    assert!(chart.cursor().is_none());

    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    chart.apply(PointerInput::Leave);
    assert!(chart.cursor().is_none());
}

#[test]
fn drag_pans_by_whole_pixels_over_bar_width() {
    let mut chart = chart();
    chart.apply(PointerInput::Down { x: 500.0, y: 200.0 });
    assert!(chart.is_dragging());
    chart.apply(PointerInput::Move { x: 600.0, y: 200.0 });
    assert_eq!(chart.view().right_offset, 20.0);

    chart.apply(PointerInput::Up);
    assert!(!chart.is_dragging());
    chart.apply(PointerInput::Move { x: 700.0, y: 200.0 });
    assert_eq!(chart.view().right_offset, 20.0);
}

#[test]
fn dragging_resolves_the_hover_after_the_pan() {
    let series = MockMarketGenerator::seeded(21)
        .generate_series(500, 300, 165.0, Timestamp::from_secs(1_699_920_000))
        .unwrap();
    let mut chart = KlineChart::new("test", series, ViewState::new(10.0, 0.0), ChartLayout::default());
    chart.resize(1060.0, 425.0);

    chart.apply(PointerInput::Down { x: 500.0, y: 200.0 });
    chart.apply(PointerInput::Move { x: 400.0, y: 200.0 });

    assert_eq!(chart.view().right_offset, -5.0);
    assert_eq!(chart.visible_range().anchor, 505);
    assert_eq!(chart.cursor().unwrap().hovered, Some(445));
}

#[test]
fn moving_without_a_press_does_not_pan() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 100.0, y: 200.0 });
    chart.apply(PointerInput::Move { x: 900.0, y: 200.0 });
    assert_eq!(chart.view().right_offset, 10.0);
}

#[test]
fn leaving_mid_drag_ends_the_drag() {
    let mut chart = chart();
    chart.apply(PointerInput::Down { x: 500.0, y: 200.0 });
    chart.apply(PointerInput::Move { x: 1040.0, y: 200.0 });
    assert!(!chart.is_dragging());
    assert_eq!(chart.view().right_offset, 10.0);
}

#[test]
fn wheel_re_resolves_the_hovered_sample() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    assert_eq!(chart.cursor().unwrap().hovered, Some(440));

    // bar width 10 -> 11: floor(500 / 11) = 45 bars back from the anchor
    chart.apply(PointerInput::Wheel { delta_y: -100.0 });
    assert_eq!(chart.cursor().unwrap().hovered, Some(445));
}

#[test]
fn legend_falls_back_to_the_newest_sample() {
    let mut chart = chart();
    assert_eq!(chart.legend_point(), chart.series().latest());

    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    assert_eq!(chart.legend_point(), chart.series().get(440));

    chart.apply(PointerInput::Leave);
    assert_eq!(chart.legend_point(), chart.series().latest());
}

#[test]
fn shrinking_the_container_drops_a_cursor_outside_it() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 900.0, y: 200.0 });
    chart.resize(500.0, 425.0);
    assert!(chart.cursor().is_none());
}
