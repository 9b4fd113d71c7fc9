use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::clock::Clock;

/// How long an unchanged price stays muted before a reminder goes out.
const REMINDER_MINUTES: i64 = 10;

/// Last alert sent for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub last_notified_price: Decimal,
    pub last_notified_at: DateTime<Utc>,
}

/// Per-symbol alert dedup state.
///
/// Entries are keyed by symbol and independent of each other, so cycles for
/// different symbols can run in parallel. `should_notify` followed by
/// `record` for the *same* symbol is not atomic: the scheduler is expected to
/// drive at most one cycle per symbol at a time (single writer per key).
///
/// State lives in memory only. A restart forgets all dedup history and the
/// next breach alerts again.
pub struct NotificationLedger {
    clock: Arc<dyn Clock>,
    states: DashMap<String, NotificationRecord>,
}

impl NotificationLedger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            states: DashMap::new(),
        }
    }

    /// Decide whether an alert for `symbol` at `current_price` should go out.
    ///
    /// The first alert for a symbol always fires. After that, any price
    /// change fires immediately; an unchanged price fires again only once the
    /// reminder window has elapsed.
    pub fn should_notify(&self, symbol: &str, current_price: Decimal) -> bool {
        let Some(state) = self.states.get(symbol) else {
            return true;
        };

        if state.last_notified_price != current_price {
            tracing::info!(
                "[{}] price moved since last alert ({} -> {}), notifying",
                symbol,
                state.last_notified_price,
                current_price
            );
            return true;
        }

        let elapsed = self.clock.now() - state.last_notified_at;
        if elapsed >= Duration::minutes(REMINDER_MINUTES) {
            tracing::info!(
                "[{}] {} minutes since last alert, sending reminder",
                symbol,
                REMINDER_MINUTES
            );
            return true;
        }

        tracing::info!(
            "[{}] alert suppressed: price unchanged and inside the reminder window",
            symbol
        );
        false
    }

    /// Upsert the record for `symbol`, stamping the clock's current time.
    pub fn record(&self, symbol: &str, price: Decimal) {
        self.states.insert(
            symbol.to_string(),
            NotificationRecord {
                last_notified_price: price,
                last_notified_at: self.clock.now(),
            },
        );
    }

    /// Last recorded state for `symbol`, if any alert has gone out yet.
    pub fn last_record(&self, symbol: &str) -> Option<NotificationRecord> {
        self.states.get(symbol).map(|r| r.value().clone())
    }
}
