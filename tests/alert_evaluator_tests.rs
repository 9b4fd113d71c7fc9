use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockalert::models::{AlertDirection, MonitorTarget, PriceQuote};
use stockalert::services::evaluator;

fn petr4(sell: Decimal, buy: Decimal) -> MonitorTarget {
    MonitorTarget::new("PETR4", sell, buy).unwrap()
}

fn quote(price: Option<Decimal>) -> PriceQuote {
    PriceQuote {
        symbol: "PETR4".to_string(),
        price,
    }
}

#[test]
fn price_above_sell_target_is_a_sell() {
    let target = petr4(dec!(30.00), dec!(20.00));
    let event = evaluator::evaluate(&target, &quote(Some(dec!(35.00)))).unwrap();

    assert_eq!(event.direction, AlertDirection::Sell);
    assert_eq!(event.threshold_used, dec!(30.00));
    assert_eq!(event.price, dec!(35.00));
    assert_eq!(event.title, "[SELL] Alert for PETR4");
    assert!(event.body.contains("PETR4"));
    assert!(event.body.contains("Current price: 35.00"));
    assert!(event.body.contains("Sell target: 30.00"));
}

#[test]
fn price_below_buy_target_is_a_buy() {
    let target = petr4(dec!(30.00), dec!(20.00));
    let event = evaluator::evaluate(&target, &quote(Some(dec!(15.00)))).unwrap();

    assert_eq!(event.direction, AlertDirection::Buy);
    assert_eq!(event.threshold_used, dec!(20.00));
    assert_eq!(event.title, "[BUY] Alert for PETR4");
    assert!(event.body.contains("Current price: 15.00"));
    assert!(event.body.contains("Buy target: 20.00"));
}

#[test]
fn neutral_band_produces_no_event() {
    let target = petr4(dec!(30.00), dec!(20.00));
    assert!(evaluator::evaluate(&target, &quote(Some(dec!(25.00)))).is_none());
}

#[test]
fn sitting_exactly_on_the_sell_target_does_not_trigger() {
    let target = petr4(dec!(30.00), dec!(20.00));
    assert!(evaluator::evaluate(&target, &quote(Some(dec!(30.00)))).is_none());
}

#[test]
fn sitting_exactly_on_the_buy_target_does_not_trigger() {
    let target = petr4(dec!(30.00), dec!(20.00));
    assert!(evaluator::evaluate(&target, &quote(Some(dec!(20.00)))).is_none());
}

#[test]
fn absent_price_produces_no_event() {
    let target = petr4(dec!(30.00), dec!(20.00));
    assert!(evaluator::evaluate(&target, &quote(None)).is_none());
}

#[test]
fn sell_wins_when_thresholds_are_inverted() {
    // buy target above sell target: 25 breaches both, sell is checked first
    let target = petr4(dec!(20.00), dec!(30.00));
    let event = evaluator::evaluate(&target, &quote(Some(dec!(25.00)))).unwrap();

    assert_eq!(event.direction, AlertDirection::Sell);
    assert_eq!(event.threshold_used, dec!(20.00));
}

#[test]
fn prices_render_with_two_decimals_and_a_point() {
    let target = petr4(dec!(30), dec!(20));
    let event = evaluator::evaluate(&target, &quote(Some(dec!(35)))).unwrap();

    assert!(event.body.contains("Current price: 35.00"));
    assert!(event.body.contains("Sell target: 30.00"));
    assert!(!event.body.contains(','));
}

#[test]
fn target_normalizes_symbol_to_uppercase() {
    let target = MonitorTarget::new("  petr4 ", dec!(30.00), dec!(20.00)).unwrap();
    assert_eq!(target.symbol, "PETR4");
}

#[test]
fn empty_symbol_is_rejected() {
    assert!(MonitorTarget::new("   ", dec!(30.00), dec!(20.00)).is_err());
}
