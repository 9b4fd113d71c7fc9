use std::fmt;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDirection {
    Sell,
    Buy,
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertDirection::Sell => write!(f, "SELL"),
            AlertDirection::Buy => write!(f, "BUY"),
        }
    }
}

/// A threshold breach ready to be handed to the notification sinks.
///
/// Built once per firing cycle and dropped afterwards; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub symbol: String,
    pub direction: AlertDirection,
    pub price: Decimal,
    pub threshold_used: Decimal,
    pub title: String,
    pub body: String,
}
