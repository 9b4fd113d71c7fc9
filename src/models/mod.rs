pub mod alert;
pub mod quote;
pub mod target;

pub use alert::{AlertDirection, AlertEvent};
pub use quote::PriceQuote;
pub use target::MonitorTarget;
