use rust_decimal::Decimal;

/// A monitored security and its alert thresholds.
///
/// `sell_price` and `buy_price` are independent; no ordering between them is
/// enforced. An inverted pair (buy target above sell target) is allowed and
/// simply never fires, since no price can sit above the higher bound and
/// below the lower bound at once.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorTarget {
    pub symbol: String,
    pub sell_price: Decimal,
    pub buy_price: Decimal,
}

impl MonitorTarget {
    /// Build a target, normalizing the symbol to uppercase.
    pub fn new(symbol: &str, sell_price: Decimal, buy_price: Decimal) -> Result<Self, String> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err("symbol must not be empty".to_string());
        }

        Ok(Self {
            symbol,
            sell_price,
            buy_price,
        })
    }
}
