use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::error::MonitorError;
use crate::models::{AlertDirection, MonitorTarget, PriceQuote};
use crate::services::brapi::PriceSource;
use crate::services::evaluator;
use crate::services::ledger::NotificationLedger;
use crate::services::market_clock::MarketClock;
use crate::services::notify::NotificationSink;

/// What a single monitoring pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    MarketClosed,
    QuoteUnavailable,
    NoAlert,
    Alerted(AlertDirection),
}

/// Orchestrates one evaluation pass over the injected collaborators.
pub struct Monitor {
    market: MarketClock,
    price_source: Arc<dyn PriceSource>,
    sinks: Vec<Arc<dyn NotificationSink>>,
    ledger: NotificationLedger,
}

impl Monitor {
    pub fn new(
        market: MarketClock,
        price_source: Arc<dyn PriceSource>,
        sinks: Vec<Arc<dyn NotificationSink>>,
        ledger: NotificationLedger,
    ) -> Self {
        Self {
            market,
            price_source,
            sinks,
            ledger,
        }
    }

    /// One monitoring pass for `target`.
    ///
    /// Short-circuits in order: market gate (no fetch happens while closed),
    /// quote fetch, threshold evaluation, dedup gate, sink fan-out. Only a
    /// price-fetch transport failure makes the cycle itself fail; a failing
    /// sink is logged and delivery continues with the remaining sinks.
    pub async fn run_once(&self, target: &MonitorTarget) -> Result<CycleOutcome, MonitorError> {
        if !self.market.is_open() {
            tracing::debug!("market closed, skipping {}", target.symbol);
            return Ok(CycleOutcome::MarketClosed);
        }

        let price = self.price_source.fetch_price(&target.symbol).await?;
        let quote = PriceQuote {
            symbol: target.symbol.clone(),
            price,
        };

        let Some(price) = quote.price else {
            tracing::warn!("could not get a quote for {}", target.symbol);
            return Ok(CycleOutcome::QuoteUnavailable);
        };
        tracing::info!("quote {}: {}", target.symbol, price);

        let Some(event) = evaluator::evaluate(target, &quote) else {
            return Ok(CycleOutcome::NoAlert);
        };

        if !self.ledger.should_notify(&event.symbol, event.price) {
            return Ok(CycleOutcome::NoAlert);
        }

        tracing::warn!(
            "{} alert: {} at {} (target {})",
            event.direction,
            event.symbol,
            event.price,
            event.threshold_used
        );

        let mut delivered = 0usize;
        for sink in &self.sinks {
            match sink.send(&event.title, &event.body).await {
                Ok(()) => delivered += 1,
                Err(err) => {
                    tracing::error!("sink '{}' failed for {}: {}", sink.name(), event.symbol, err);
                }
            }
        }
        tracing::info!(
            "alert for {} delivered to {}/{} sinks",
            event.symbol,
            delivered,
            self.sinks.len()
        );

        self.ledger.record(&event.symbol, event.price);
        Ok(CycleOutcome::Alerted(event.direction))
    }

    /// Drive `run_once` on a fixed interval.
    ///
    /// A failed cycle is logged and the loop keeps going. The future never
    /// resolves; main races it against Ctrl-C, and dropping it cancels the
    /// inter-cycle sleep immediately.
    pub async fn run(&self, target: &MonitorTarget, interval_secs: u64) {
        loop {
            match self.run_once(target).await {
                Ok(outcome) => {
                    tracing::debug!("cycle for {} finished: {:?}", target.symbol, outcome)
                }
                Err(err) => tracing::error!("cycle for {} failed: {}", target.symbol, err),
            }

            tracing::info!("waiting {}s until the next cycle", interval_secs);
            sleep(Duration::from_secs(interval_secs)).await;
        }
    }

    /// Dedup state, mainly for tests and diagnostics.
    pub fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }
}
