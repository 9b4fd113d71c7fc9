use rust_decimal::Decimal;

/// One price observation for a symbol.
///
/// `price: None` means the venue had no quote this cycle (thin trading,
/// unknown symbol). That is a normal outcome, not a transport failure.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Option<Decimal>,
}
