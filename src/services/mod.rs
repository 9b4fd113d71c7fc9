pub mod brapi;
pub mod monitor;

pub mod evaluator;
pub mod ledger;
pub mod market_clock;
pub mod notify;
