use kline_chart_wasm::domain::chart::{ChartLayout, ChartPalette, KlineChart, PointerInput};
use kline_chart_wasm::domain::market_data::services::MockMarketGenerator;
use kline_chart_wasm::domain::market_data::{OHLCV, Price, PricePoint, PriceSeries, Timestamp, Volume};
use kline_chart_wasm::infrastructure::rendering::chart_renderer::VOLUME_ALPHA;
use kline_chart_wasm::infrastructure::rendering::{ChartRenderer, DrawCommand, DrawList, Legend};
use kline_chart_wasm::view_state::ViewState;

const END: u64 = 1_699_920_000;

fn chart() -> KlineChart {
    let series = MockMarketGenerator::seeded(77)
        .generate_series(500, 300, 165.0, Timestamp::from_secs(END))
        .unwrap();
    let mut chart = KlineChart::new("render", series, ViewState::default(), ChartLayout::default());
    chart.resize(1060.0, 425.0);
    chart
}

fn render(chart: &KlineChart) -> DrawList {
    let mut list = DrawList::new();
    ChartRenderer::default().render(chart, &mut list, 0);
    list
}

fn lines_with_dash(list: &DrawList, dash: [f64; 2]) -> usize {
    list.commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { style, .. } if style.dash == Some(dash)))
        .count()
}

#[test]
fn empty_series_draws_only_the_background() {
    let mut chart = KlineChart::new("empty", PriceSeries::empty(300), ViewState::default(), ChartLayout::default());
    chart.resize(800.0, 400.0);
    let list = render(&chart);

    assert_eq!(list.len(), 1);
    assert!(matches!(
        list.commands()[0],
        DrawCommand::BeginFrame { width, height, .. } if width == 800.0 && height == 400.0
    ));
}

#[test]
fn zero_sized_container_draws_only_the_background() {
    let mut chart = chart();
    chart.resize(0.0, 0.0);
    assert_eq!(render(&chart).len(), 1);
}

#[test]
fn same_state_renders_the_same_frame() {
    let mut chart = chart();
    chart.apply(PointerInput::Move { x: 420.0, y: 120.0 });

    let mut list = DrawList::new();
    let renderer = ChartRenderer::default();
    renderer.render(&chart, &mut list, 0);
    let first = list.clone();
    renderer.render(&chart, &mut list, 0);
    assert_eq!(first, list);
}

#[test]
fn grid_has_seven_horizontal_lines_with_price_labels() {
    let list = render(&chart());
    let horizontal = list
        .commands()
        .iter()
        .filter(|c| {
            matches!(c, DrawCommand::Line { from, to, style }
                if from.1 == to.1 && style.width == 0.5 && style.dash == Some([4.0, 4.0]))
        })
        .count();
    assert_eq!(horizontal, 7);
}

#[test]
fn each_moving_average_is_one_polyline_once_defined() {
    let list = render(&chart());
    let polylines = list.commands().iter().filter(|c| matches!(c, DrawCommand::Polyline { .. })).count();
    assert_eq!(polylines, 3);
}

#[test]
fn undefined_moving_average_values_are_skipped() {
    let series = MockMarketGenerator::seeded(1)
        .generate_series(30, 300, 165.0, Timestamp::from_secs(END))
        .unwrap();
    let mut chart = KlineChart::new("short", series, ViewState::new(10.0, 0.0), ChartLayout::default());
    chart.resize(1060.0, 425.0);
    let list = render(&chart);

    let lengths: Vec<usize> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .collect();
    assert_eq!(lengths, vec![26, 21, 11]);
}

#[test]
fn one_volume_bar_per_visible_sample() {
    let list = render(&chart());
    let volume = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if color.a == VOLUME_ALPHA))
        .count();
    assert_eq!(volume, 100);
}

#[test]
fn time_labels_every_twenty_bars() {
    let list = render(&chart());
    let texts = list.texts();
    assert_eq!(&texts[texts.len() - 5..], ["14:55", "16:35", "18:15", "19:55", "21:35"]);
}

#[test]
fn utc_offset_shifts_time_labels() {
    let mut list = DrawList::new();
    ChartRenderer::default().render(&chart(), &mut list, 60);
    assert_eq!(list.texts().last().copied(), Some("22:35"));
}

#[test]
fn crosshair_only_with_a_cursor() {
    let mut chart = chart();
    assert_eq!(lines_with_dash(&render(&chart), [6.0, 6.0]), 0);

    chart.apply(PointerInput::Move { x: 500.0, y: 200.0 });
    let list = render(&chart);
    assert_eq!(lines_with_dash(&list, [6.0, 6.0]), 2);

    let hovered = chart.series().get(440).unwrap();
    let label = kline_chart_wasm::time_utils::format_time_label(hovered.timestamp.value(), 0);
    assert!(list.texts().contains(&label.as_str()));
}

#[test]
fn legend_line_shows_two_decimals_and_whole_volume() {
    let point = PricePoint::new(
        Timestamp::from_secs(0),
        OHLCV::new(Price::from(1.0), Price::from(2.0), Price::from(0.5), Price::from(1.5), Volume::from(300.0)),
    );
    let legend = Legend::for_point(&point, &ChartPalette::default());

    insta::assert_snapshot!(legend.line(), @"O: 1.00 H: 2.00 L: 0.50 C: 1.50 Vol: 300");
    assert!(legend.is_up);
    assert_eq!(legend.value_color, "#089981");
    assert_eq!(legend.moving_averages.len(), 3);
}
