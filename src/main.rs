use std::env;
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use stockalert::clock::{Clock, SystemClock};
use stockalert::config;
use stockalert::models::MonitorTarget;
use stockalert::services::brapi::BrapiClient;
use stockalert::services::ledger::NotificationLedger;
use stockalert::services::market_clock::MarketClock;
use stockalert::services::monitor::Monitor;
use stockalert::services::notify;

fn usage() {
    println!("Usage: stockalert <SYMBOL> <SELL_PRICE> <BUY_PRICE>");
    println!("Example: stockalert PETR4 22.67 22.59");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        usage();
        process::exit(2);
    }

    let sell_price = match Decimal::from_str(&args[2]) {
        Ok(v) => v,
        Err(_) => {
            println!("Invalid sell price: {}", args[2]);
            process::exit(2);
        }
    };
    let buy_price = match Decimal::from_str(&args[3]) {
        Ok(v) => v,
        Err(_) => {
            println!("Invalid buy price: {}", args[3]);
            process::exit(2);
        }
    };

    let target = match MonitorTarget::new(&args[1], sell_price, buy_price) {
        Ok(t) => t,
        Err(err) => {
            println!("Invalid target: {}", err);
            process::exit(2);
        }
    };

    let settings = config::load();

    let sinks = match notify::build_sinks(&settings) {
        Ok(s) => s,
        Err(err) => {
            println!("Invalid notification config: {}", err);
            process::exit(2);
        }
    };
    if sinks.is_empty() {
        println!("No alert channels configured (set ALERT_CHANNELS)");
        process::exit(2);
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let market = MarketClock::new(clock.clone(), settings.ignore_market_hours);
    let ledger = NotificationLedger::new(clock.clone());
    let price_source = Arc::new(BrapiClient::new(settings.brapi_token.clone()));

    let monitor = Monitor::new(market, price_source, sinks, ledger);

    tracing::info!(
        "monitoring {} every {}s (sell above {}, buy below {})",
        target.symbol,
        settings.interval_secs,
        target.sell_price,
        target.buy_price
    );

    tokio::select! {
        _ = monitor.run(&target, settings.interval_secs) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, stopping monitor");
        }
    }
}
