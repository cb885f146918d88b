use leptos::html::{Canvas, Div};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::{ChartService, MarketFeed, MarketIntelService};
use crate::config::{DashboardConfig, IntelConfig};
use crate::domain::chart::PointerInput;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market_data::{AssetName, OrderBook, OrderBookLevel, Timestamp, Trade, TradeSide};
use crate::domain::market_intel::MarketSnapshot;
use crate::event_utils::{EventOptions, listen_with_options, window_listener};
use crate::global_state::{chart_dragging, chart_legend, intel_text, is_analyzing};
use crate::infrastructure::http::GeminiClient;
use crate::infrastructure::rendering::CanvasSurface;
use crate::time_utils::format_price;

pub const DEFAULT_ASSET: &str = "Pokémon 151 Japanese Booster Box";
pub const DEFAULT_FLOOR_PRICE: f64 = 185.0;
pub const DEFAULT_CHANGE_24H: f64 = 2.4;

/// Terminal page: header, kline chart, depth ladder, trades tape and intel.
#[component]
pub fn App(#[prop(optional)] api_key: Option<String>, #[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let seed = config.series.seed.unwrap_or_else(|| get_time_provider().current_timestamp());
    let mut feed = MarketFeed::seeded(seed);
    let book = feed.order_book(DEFAULT_FLOOR_PRICE);
    let trades = feed.trades(DEFAULT_FLOOR_PRICE);
    let change_class = if DEFAULT_CHANGE_24H >= 0.0 { "change up" } else { "change down" };

    view! {
        <style>{TERMINAL_CSS}</style>
        <div class="terminal">
            <header class="terminal-header">
                <span class="asset">{DEFAULT_ASSET}</span>
                <span class="price">{format!("${}", format_price(DEFAULT_FLOOR_PRICE))}</span>
                <span class=change_class>{format!("{:+.1}%", DEFAULT_CHANGE_24H)}</span>
            </header>
            <div class="terminal-body">
                <div class="chart-pane">
                    <KlineChartView price_hint=DEFAULT_FLOOR_PRICE config=config.clone() />
                </div>
                <aside class="side-pane">
                    <OrderBookPanel asset=DEFAULT_ASSET.to_string() book=book />
                    <TradesTape trades=trades />
                    <MarketIntelPanel
                        api_key=api_key.unwrap_or_default()
                        asset=DEFAULT_ASSET.to_string()
                        last_price=DEFAULT_FLOOR_PRICE
                        change_24h=DEFAULT_CHANGE_24H
                        intel=config.intel.clone()
                    />
                </aside>
            </div>
        </div>
    }
}

fn local_point(container: &NodeRef<Div>, ev: &ev::MouseEvent) -> Option<(f64, f64)> {
    let rect = container.get_untracked()?.get_bounding_client_rect();
    Some((ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top()))
}

/// Canvas kline chart. The price hint seeds the generated series.
#[component]
pub fn KlineChartView(price_hint: f64, #[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let now = Timestamp::from_secs(get_time_provider().current_unix_seconds());
    let service = match ChartService::from_config("terminal-chart", &config, Some(price_hint), now) {
        Ok(service) => Rc::new(RefCell::new(service)),
        Err(e) => {
            crate::log_error!(LogComponent::Presentation("KlineChartView"), "chart setup failed: {}", e);
            return view! { <div class="chart-error">{e.to_string()}</div> }.into_view();
        }
    };

    let container_ref = create_node_ref::<Div>();
    let canvas_ref = create_node_ref::<Canvas>();
    let legend = chart_legend();

    // resize to the container, draw, publish the legend
    let redraw: Rc<dyn Fn()> = {
        let service = Rc::clone(&service);
        Rc::new(move || {
            let (Some(container), Some(canvas)) = (container_ref.get_untracked(), canvas_ref.get_untracked()) else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let mut service = service.borrow_mut();
            service.resize(rect.width(), rect.height());
            match CanvasSurface::new((*canvas).clone()) {
                Ok(mut surface) => service.render(&mut surface),
                Err(e) => {
                    crate::log_error!(LogComponent::Presentation("KlineChartView"), "{}", e);
                }
            }
            legend.set(service.legend());
            chart_dragging().set(service.chart().is_dragging());
        })
    };

    let dispatch = {
        let service = Rc::clone(&service);
        let redraw = Rc::clone(&redraw);
        Rc::new(move |input: PointerInput| {
            service.borrow_mut().handle(input);
            redraw();
        })
    };

    {
        let redraw = Rc::clone(&redraw);
        let dispatch = Rc::clone(&dispatch);
        container_ref.on_load(move |container| {
            let wheel = listen_with_options(&container, "wheel", &EventOptions::active(), move |ev| {
                ev.prevent_default();
                if let Some(wheel) = wasm_bindgen::JsCast::dyn_ref::<web_sys::WheelEvent>(ev) {
                    dispatch(PointerInput::Wheel { delta_y: wheel.delta_y() });
                }
            });
            let on_resize = Rc::clone(&redraw);
            let resize = window_listener("resize", &EventOptions::default(), move |_| on_resize());
            on_cleanup(move || {
                drop(wheel);
                drop(resize);
            });
            request_animation_frame(move || redraw());
        });
    }

    let on_down = {
        let dispatch = Rc::clone(&dispatch);
        move |ev: ev::MouseEvent| {
            if let Some((x, y)) = local_point(&container_ref, &ev) {
                dispatch(PointerInput::Down { x, y });
            }
        }
    };
    let on_move = {
        let dispatch = Rc::clone(&dispatch);
        move |ev: ev::MouseEvent| {
            if let Some((x, y)) = local_point(&container_ref, &ev) {
                dispatch(PointerInput::Move { x, y });
            }
        }
    };
    let on_up = {
        let dispatch = Rc::clone(&dispatch);
        move |_: ev::MouseEvent| dispatch(PointerInput::Up)
    };
    let on_leave = {
        let dispatch = Rc::clone(&dispatch);
        move |_: ev::MouseEvent| dispatch(PointerInput::Leave)
    };

    view! {
        <div
            class="kline-chart"
            class:dragging=move || chart_dragging().get()
            node_ref=container_ref
            on:mousedown=on_down
            on:mousemove=on_move
            on:mouseup=on_up
            on:mouseleave=on_leave
        >
            <div class="kline-legend">
                {move || legend.get().map(|l| view! {
                    <div class="ohlcv">
                        <span>"O: "<b style:color=l.value_color.clone()>{l.open.clone()}</b></span>
                        <span>"H: "<b style:color=l.value_color.clone()>{l.high.clone()}</b></span>
                        <span>"L: "<b style:color=l.value_color.clone()>{l.low.clone()}</b></span>
                        <span>"C: "<b style:color=l.value_color.clone()>{l.close.clone()}</b></span>
                        <span>"Vol: "<b class="vol">{l.volume.clone()}</b></span>
                    </div>
                    <div class="ma-legend">
                        {l.moving_averages.iter().map(|ma| view! {
                            <span style:color=ma.color.clone()>{ma.label.clone()}</span>
                        }).collect_view()}
                    </div>
                })}
            </div>
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
    .into_view()
}

fn depth_row(level: &OrderBookLevel, max_size: u32, class: &'static str) -> impl IntoView {
    let bar = format!("{:.1}%", level.depth_share(max_size) * 100.0);
    view! {
        <div class=format!("depth-row {}", class)>
            <div class="depth-bar" style:width=bar></div>
            <span class="px">{format!("${}", format_price(level.price))}</span>
            <span class="size">{level.size}</span>
            <span class="total">{format!("{:.0}", level.total)}</span>
        </div>
    }
}

#[component]
pub fn OrderBookPanel(asset: String, book: OrderBook) -> impl IntoView {
    let spread = book.spread().map(format_price).unwrap_or_else(|| "--".to_string());
    let max_size = book.max_size();
    view! {
        <section class="panel order-book">
            <div class="panel-title">"Live Order"<span class="muted">{asset}</span></div>
            <div class="depth">
                <div class="bids">
                    <div class="side-label buy">"Buy"</div>
                    {book.bids.iter().map(|l| depth_row(l, max_size, "bid")).collect_view()}
                </div>
                <div class="asks">
                    <div class="side-label sell">"Sell"</div>
                    {book.asks.iter().map(|l| depth_row(l, max_size, "ask")).collect_view()}
                </div>
            </div>
            <div class="spread">"Spread: "{spread}</div>
        </section>
    }
}

#[component]
pub fn TradesTape(trades: Vec<Trade>) -> impl IntoView {
    view! {
        <section class="panel trades">
            <div class="panel-title">"Recent Trades"</div>
            {trades
                .into_iter()
                .map(|t| {
                    let class = match t.side {
                        TradeSide::Buy => "trade buy",
                        TradeSide::Sell => "trade sell",
                    };
                    view! {
                        <div class=class>
                            <span class="px">{format!("${}", format_price(t.price))}</span>
                            <span class="qty">{t.quantity}</span>
                            <span class="ago">{format!("{}s ago", t.seconds_ago)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

/// Runs the intel request on demand. A second click while busy is ignored.
#[component]
pub fn MarketIntelPanel(
    api_key: String,
    asset: String,
    last_price: f64,
    change_24h: f64,
    #[prop(optional)] intel: Option<IntelConfig>,
) -> impl IntoView {
    let text = intel_text();
    let busy = is_analyzing();
    let asset = store_value(asset);
    let api_key = store_value(api_key);
    let intel = store_value(intel.unwrap_or_default());

    let on_analyze = move |_: ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let Ok(name) = AssetName::new(asset.get_value()) else {
            crate::log_warn!(LogComponent::Presentation("MarketIntelPanel"), "empty asset name");
            return;
        };
        busy.set(true);
        let snapshot = MarketSnapshot::new(name, last_price, change_24h);
        let client = GeminiClient::new(api_key.get_value(), intel.get_value());
        spawn_local(async move {
            let report = MarketIntelService::new(client).analyze(&snapshot).await;
            text.set(Some(report));
            busy.set(false);
        });
    };

    view! {
        <section class="panel intel">
            <div class="panel-title">"Market Scout"</div>
            <button class="analyze" on:click=on_analyze disabled=move || busy.get()>
                {move || if busy.get() { "Analyzing..." } else { "Get Buyer's Intel" }}
            </button>
            <pre class="intel-text">{move || text.get().unwrap_or_default()}</pre>
        </section>
    }
}

const TERMINAL_CSS: &str = r#"
.terminal { background: #0b0e11; color: #d1d4dc; min-height: 100vh; font-family: 'JetBrains Mono', monospace; }
.terminal-header { display: flex; gap: 16px; align-items: baseline; padding: 12px 16px; border-bottom: 1px solid #1e222d; }
.terminal-header .asset { font-weight: 700; color: #fff; }
.terminal-header .change.up { color: #089981; }
.terminal-header .change.down { color: #f23645; }
.terminal-body { display: flex; gap: 12px; padding: 12px; }
.chart-pane { flex: 1; min-width: 0; height: 480px; }
.side-pane { width: 300px; display: flex; flex-direction: column; gap: 12px; }
.kline-chart { position: relative; width: 100%; height: 100%; overflow: hidden; cursor: crosshair; }
.kline-chart.dragging { cursor: grabbing; }
.kline-chart canvas { width: 100%; height: 100%; display: block; }
.kline-legend { position: absolute; top: 8px; left: 16px; display: flex; gap: 16px; font-size: 10px; pointer-events: none; }
.kline-legend .ohlcv { display: flex; gap: 12px; color: #9ca3af; }
.kline-legend .vol { color: #eab308; }
.kline-legend .ma-legend { display: flex; gap: 8px; font-weight: 700; }
.panel { background: #12161c; border: 1px solid #1e222d; border-radius: 8px; padding: 8px; font-size: 11px; }
.panel-title { display: flex; justify-content: space-between; text-transform: uppercase; color: #707a8a; margin-bottom: 6px; }
.depth { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; }
.depth-row, .trade { display: flex; justify-content: space-between; padding: 2px 0; }
.depth-row { position: relative; }
.depth-row span { position: relative; flex: 1; }
.depth-row .total { text-align: right; opacity: 0.7; }
.depth-bar { position: absolute; top: 0; bottom: 0; right: 0; opacity: 0.15; }
.bid .depth-bar { background: #089981; }
.ask .depth-bar { background: #f23645; }
.bid .px, .side-label.buy, .trade.buy .px { color: #089981; }
.ask .px, .side-label.sell, .trade.sell .px { color: #f23645; }
.intel-text { white-space: pre-wrap; font-size: 11px; }
"#;
