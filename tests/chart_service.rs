use kline_chart_wasm::application::ChartService;
use kline_chart_wasm::config::DashboardConfig;
use kline_chart_wasm::domain::chart::PointerInput;
use kline_chart_wasm::domain::market_data::Timestamp;
use kline_chart_wasm::infrastructure::rendering::{DrawCommand, DrawList};

const NOW: u64 = 1_699_920_000;

fn config() -> DashboardConfig {
    DashboardConfig::from_json(r#"{"series": {"seed": 12}}"#).unwrap()
}

fn service() -> ChartService {
    let mut service = ChartService::from_config("main", &config(), None, Timestamp::from_secs(NOW)).unwrap();
    service.resize(1060.0, 425.0);
    service
}

#[test]
fn configured_seed_reproduces_the_chart() {
    let a = service();
    let b = service();
    assert_eq!(a.chart().series(), b.chart().series());
    assert_eq!(a.chart().series().len(), 500);
    assert_eq!(a.chart().series().latest().unwrap().timestamp.value(), NOW);
}

#[test]
fn price_hint_seeds_the_walk() {
    let service = ChartService::from_config("hinted", &config(), Some(1_000.0), Timestamp::from_secs(NOW)).unwrap();
    let first = service.chart().series().get(0).unwrap();
    assert!((first.open() - 1_000.0).abs() <= 2.0 + 1e-9);
}

#[test]
fn legend_follows_the_pointer() {
    let mut service = service();
    let latest = service.chart().series().latest().unwrap().close();
    assert_eq!(service.legend().unwrap().close, format!("{:.2}", latest));

    service.handle(PointerInput::Move { x: 500.0, y: 200.0 });
    let hovered = service.chart().series().get(440).unwrap().close();
    assert_eq!(service.legend().unwrap().close, format!("{:.2}", hovered));
}

#[test]
fn input_is_routed_into_the_chart() {
    let mut service = service();
    service.handle(PointerInput::Wheel { delta_y: -1.0 });
    assert!(service.chart().view().bar_width > 10.0);

    service.handle(PointerInput::Down { x: 300.0, y: 100.0 });
    service.handle(PointerInput::Move { x: 200.0, y: 100.0 });
    service.handle(PointerInput::Up);
    assert!(service.chart().view().right_offset < 10.0);
}

#[test]
fn render_starts_with_a_full_frame() {
    let service = service();
    let mut list = DrawList::new();
    service.render_with_offset(&mut list, 0);
    assert!(matches!(
        list.commands()[0],
        DrawCommand::BeginFrame { width, height, .. } if width == 1060.0 && height == 425.0
    ));
    assert!(list.len() > 200);
}
