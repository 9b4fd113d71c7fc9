use rust_decimal::Decimal;

use crate::models::{AlertDirection, AlertEvent, MonitorTarget, PriceQuote};

/// Decide whether `quote` breaches either threshold of `target`.
///
/// Sell is checked first, so with inverted thresholds (buy target above sell
/// target) a price breaching both reads as a sell. The neutral band
/// `[buy_price, sell_price]` is inclusive on both ends: a price sitting
/// exactly on a threshold does not trigger.
pub fn evaluate(target: &MonitorTarget, quote: &PriceQuote) -> Option<AlertEvent> {
    let price = quote.price?;

    if price > target.sell_price {
        Some(build_event(
            target,
            AlertDirection::Sell,
            price,
            target.sell_price,
        ))
    } else if price < target.buy_price {
        Some(build_event(
            target,
            AlertDirection::Buy,
            price,
            target.buy_price,
        ))
    } else {
        None
    }
}

// Prices are rendered with two decimals and a plain '.' so the same alert
// text always compares equal in logs and on the wire.
fn build_event(
    target: &MonitorTarget,
    direction: AlertDirection,
    price: Decimal,
    threshold: Decimal,
) -> AlertEvent {
    let title = format!("[{}] Alert for {}", direction, target.symbol);

    let body = match direction {
        AlertDirection::Sell => format!(
            "We advise the SALE of {}.\nCurrent price: {:.2}\nSell target: {:.2}",
            target.symbol, price, threshold
        ),
        AlertDirection::Buy => format!(
            "We advise the PURCHASE of {}.\nCurrent price: {:.2}\nBuy target: {:.2}",
            target.symbol, price, threshold
        ),
    };

    AlertEvent {
        symbol: target.symbol.clone(),
        direction,
        price,
        threshold_used: threshold,
        title,
        body,
    }
}
