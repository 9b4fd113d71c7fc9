use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub brapi_token: String,
    pub interval_secs: u64,
    pub ignore_market_hours: bool,

    // "console" and/or "webhook", in delivery order
    pub channels: Vec<String>,
    pub webhook_url: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let brapi_token = env::var("BRAPI_TOKEN").unwrap_or_default();

    let interval_secs = env::var("MONITOR_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60);

    let ignore_market_hours = env::var("IGNORE_MARKET_HOURS")
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let channels = env::var("ALERT_CHANNELS")
        .unwrap_or_else(|_| "console".to_string())
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    let webhook_url = env::var("WEBHOOK_URL").unwrap_or_default();

    Settings {
        brapi_token,
        interval_secs,
        ignore_market_hours,
        channels,
        webhook_url,
    }
}
