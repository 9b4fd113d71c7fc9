use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::MonitorError;

/// Where the current price of a symbol comes from.
///
/// Implementations own their retry/backoff. `Ok(None)` means the venue had
/// no quote for the symbol this cycle, which is not a failure.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_price(&self, symbol: &str) -> Result<Option<Decimal>, MonitorError>;
}

const BASE_URL: &str = "https://brapi.dev/api/quote";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 3;

/// Quote client for the brapi.dev API.
#[derive(Clone)]
pub struct BrapiClient {
    http: Client,
    token: String,
    base_url: String,
}

impl BrapiClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, BASE_URL.to_string())
    }

    /// Point the client at a different quote endpoint (mirrors, test servers).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            token,
            base_url,
        }
    }

    async fn quote_once(&self, symbol: &str) -> Result<Option<Decimal>, MonitorError> {
        let url = format!("{}/{}", self.base_url, symbol);

        let mut req = self.http.get(&url);
        if !self.token.trim().is_empty() {
            req = req.query(&[("token", self.token.as_str())]);
        }

        let res = req.send().await.map_err(|e| MonitorError::PriceFetch {
            symbol: symbol.to_string(),
            source: e,
        })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(MonitorError::QuoteStatus {
                symbol: symbol.to_string(),
                status,
                body,
            });
        }

        let data: QuoteResponse = res.json().await.map_err(|e| MonitorError::PriceFetch {
            symbol: symbol.to_string(),
            source: e,
        })?;

        let price = data
            .results
            .into_iter()
            .next()
            .and_then(|r| r.regular_market_price);

        if price.is_none() {
            tracing::warn!("no price in quote payload for {}", symbol);
        }

        Ok(price)
    }
}

// Connection-level failures, 5xx, and 404 are worth retrying (brapi
// intermittently answers 404 for symbols it does know).
fn is_transient(err: &MonitorError) -> bool {
    match err {
        MonitorError::PriceFetch { source, .. } => source.is_timeout() || source.is_connect(),
        MonitorError::QuoteStatus { status, .. } => {
            status.is_server_error() || *status == StatusCode::NOT_FOUND
        }
        _ => false,
    }
}

#[async_trait]
impl PriceSource for BrapiClient {
    async fn fetch_price(&self, symbol: &str) -> Result<Option<Decimal>, MonitorError> {
        let mut attempt = 0u32;

        loop {
            match self.quote_once(symbol).await {
                Ok(price) => return Ok(price),
                Err(err) if attempt < MAX_RETRIES && is_transient(&err) => {
                    attempt += 1;
                    let delay = Duration::from_secs(2u64.pow(attempt));
                    tracing::warn!(
                        "quote fetch for {} failed (attempt {}/{}), retrying in {:?}: {}",
                        symbol,
                        attempt,
                        MAX_RETRIES,
                        delay,
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub results: Vec<QuoteResult>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResult {
    pub symbol: Option<String>,

    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<Decimal>,
}
