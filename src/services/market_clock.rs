use std::sync::Arc;

use chrono::{Datelike, FixedOffset, NaiveTime, Weekday};

use crate::clock::Clock;

/// B3 trades 10:00-17:30 São Paulo time, Monday to Friday. The exchange sits
/// on a fixed UTC-3 offset (Brazil dropped daylight saving in 2019), so no
/// tz database lookup is needed. Both window edges are inclusive.
const UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Decides whether monitoring should run right now.
#[derive(Clone)]
pub struct MarketClock {
    clock: Arc<dyn Clock>,
    ignore_market_hours: bool,
}

impl MarketClock {
    pub fn new(clock: Arc<dyn Clock>, ignore_market_hours: bool) -> Self {
        Self {
            clock,
            ignore_market_hours,
        }
    }

    /// True when the override flag is set, i.e. `is_open` always answers true.
    pub fn ignores_market_hours(&self) -> bool {
        self.ignore_market_hours
    }

    pub fn is_open(&self) -> bool {
        if self.ignore_market_hours {
            tracing::warn!("market hours check bypassed (IGNORE_MARKET_HOURS is set)");
            return true;
        }

        let offset = FixedOffset::west_opt(UTC_OFFSET_SECS).unwrap();
        let local = self.clock.now().with_timezone(&offset);

        if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
            tracing::debug!("market closed: {}", local.weekday());
            return false;
        }

        let open = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let close = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
        let time_of_day = local.time();

        if time_of_day >= open && time_of_day <= close {
            return true;
        }

        tracing::debug!(
            "market closed at {}; open window is {} to {}",
            time_of_day,
            open,
            close
        );
        false
    }
}
