use kline_chart_wasm::application::MarketFeed;
use kline_chart_wasm::domain::market_data::services::{DEPTH_LEVELS, TAPE_LENGTH};
use kline_chart_wasm::domain::market_data::{Side, TradeSide};

#[test]
fn asks_climb_from_the_floor_and_bids_fall_below_it() {
    let book = MarketFeed::seeded(4).order_book(185.0);

    let asks: Vec<f64> = book.asks.iter().map(|l| l.price).collect();
    let bids: Vec<f64> = book.bids.iter().map(|l| l.price).collect();
    assert_eq!(asks, [185.0, 185.5, 186.0, 186.5, 187.0, 187.5]);
    assert_eq!(bids, [184.5, 184.0, 183.5, 183.0, 182.5, 182.0]);
    assert_eq!(book.spread(), Some(0.5));
    assert!(book.asks.iter().all(|l| l.side == Side::Ask));
    assert!(book.bids.iter().all(|l| l.side == Side::Bid));
}

#[test]
fn totals_accumulate_notional_from_the_best_level() {
    let book = MarketFeed::seeded(8).order_book(185.0);
    for side in [&book.asks, &book.bids] {
        assert_eq!(side.len(), DEPTH_LEVELS);
        let mut running = 0.0;
        for level in side.iter() {
            assert!((5..=54).contains(&level.size));
            running += level.price * level.size as f64;
            assert!((level.total - running).abs() < 1e-9);
        }
    }
    assert!(book.max_size() >= 5);
}

#[test]
fn depth_bars_scale_to_the_widest_level() {
    let book = MarketFeed::seeded(8).order_book(185.0);
    let max_size = book.max_size();
    let shares: Vec<f64> = book.asks.iter().chain(book.bids.iter()).map(|l| l.depth_share(max_size)).collect();

    assert!(shares.iter().all(|s| (0.0..=1.0).contains(s)));
    assert!(shares.iter().any(|s| *s == 1.0));
    assert_eq!(book.bids[0].depth_share(0), 0.0);
    assert_eq!(book.bids[0].depth_share(book.bids[0].size * 2), 0.5);
}

#[test]
fn trades_stay_within_a_dollar_and_count_up_in_age() {
    let trades = MarketFeed::seeded(15).trades(185.0);
    assert_eq!(trades.len(), TAPE_LENGTH);
    for (i, trade) in trades.iter().enumerate() {
        assert!((trade.price - 185.0).abs() <= 1.0);
        assert!((1..=20).contains(&trade.quantity));
        assert_eq!(trade.seconds_ago, i as u32 + 1);
        assert!(matches!(trade.side, TradeSide::Buy | TradeSide::Sell));
        assert_eq!(trade.id.len(), 16);
    }
}

#[test]
fn same_seed_gives_the_same_depth() {
    assert_eq!(MarketFeed::seeded(99).depth(185.0), MarketFeed::seeded(99).depth(185.0));
}

#[test]
fn depth_serializes_sides_in_lowercase() {
    let depth = MarketFeed::seeded(2).depth(185.0);
    let json = serde_json::to_value(&depth).unwrap();
    assert_eq!(json["book"]["asks"][0]["side"], "ask");
    assert_eq!(json["book"]["bids"][0]["side"], "bid");
    let side = json["trades"][0]["side"].as_str().unwrap();
    assert!(side == "buy" || side == "sell");
}
