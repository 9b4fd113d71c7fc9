use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use stockalert::clock::Clock;
use stockalert::services::market_clock::MarketClock;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Instants below are given in UTC; the market window is 10:00-17:30 at
// UTC-3, i.e. 13:00-20:30 UTC on the same date.
fn clock_at_utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(),
    ))
}

#[test]
fn closed_on_saturday() {
    // 2023-10-21 is a Saturday; 14:00 local would otherwise be mid-session
    let market = MarketClock::new(clock_at_utc(2023, 10, 21, 17, 0, 0), false);
    assert!(!market.is_open());
}

#[test]
fn closed_on_sunday() {
    let market = MarketClock::new(clock_at_utc(2023, 10, 22, 17, 0, 0), false);
    assert!(!market.is_open());
}

#[test]
fn open_midday_on_a_weekday() {
    // Tuesday 2023-10-24, 13:00 local
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 16, 0, 0), false);
    assert!(market.is_open());
}

#[test]
fn open_exactly_at_the_opening_bell() {
    // 10:00:00 local is inclusive
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 13, 0, 0), false);
    assert!(market.is_open());
}

#[test]
fn closed_one_second_before_open() {
    // 09:59:59 local
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 12, 59, 59), false);
    assert!(!market.is_open());
}

#[test]
fn open_exactly_at_the_closing_bell() {
    // 17:30:00 local is inclusive
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 20, 30, 0), false);
    assert!(market.is_open());
}

#[test]
fn closed_one_second_after_close() {
    // 17:30:01 local
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 20, 30, 1), false);
    assert!(!market.is_open());
}

#[test]
fn utc_monday_early_morning_is_still_sunday_locally() {
    // 01:00 UTC on Monday 2023-10-23 is 22:00 Sunday at UTC-3
    let market = MarketClock::new(clock_at_utc(2023, 10, 23, 1, 0, 0), false);
    assert!(!market.is_open());
}

#[test]
fn override_forces_open_on_a_weekend() {
    let market = MarketClock::new(clock_at_utc(2023, 10, 21, 17, 0, 0), true);
    assert!(market.is_open());
    assert!(market.ignores_market_hours());
}

#[test]
fn override_flag_is_observable_when_off() {
    let market = MarketClock::new(clock_at_utc(2023, 10, 24, 16, 0, 0), false);
    assert!(!market.ignores_market_hours());
}
