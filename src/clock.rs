use chrono::{DateTime, Utc};

/// Time source abstraction.
///
/// Market-hours gating and the notification ledger both depend on "now";
/// injecting the clock keeps them deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
