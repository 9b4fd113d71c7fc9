use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Settings;
use crate::error::MonitorError;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound alert channel.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Channel name used in logs.
    fn name(&self) -> &str;

    async fn send(&self, title: &str, body: &str) -> Result<(), MonitorError>;
}

/// Writes alerts to the process log.
pub struct ConsoleSink;

#[async_trait]
impl NotificationSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    async fn send(&self, title: &str, body: &str) -> Result<(), MonitorError> {
        tracing::warn!("{}", title);
        for line in body.lines() {
            tracing::warn!("  {}", line);
        }
        Ok(())
    }
}

/// POSTs alerts to a Discord-compatible webhook.
pub struct WebhookSink {
    http: Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String) -> Self {
        let http = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, url }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, title: &str, body: &str) -> Result<(), MonitorError> {
        let payload = serde_json::json!({
            "content": format!("**{}**\n{}", title, body),
        });

        let res = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MonitorError::SinkSend {
                sink: "webhook".to_string(),
                cause: e.to_string(),
            })?;

        if !res.status().is_success() {
            return Err(MonitorError::SinkSend {
                sink: "webhook".to_string(),
                cause: format!("webhook returned {}", res.status()),
            });
        }

        Ok(())
    }
}

/// Build the sink list from the configured channel names, in order.
///
/// Rejects unknown channel names and a webhook channel without a URL, so bad
/// notification config dies at startup instead of during the first alert.
pub fn build_sinks(settings: &Settings) -> Result<Vec<Arc<dyn NotificationSink>>, String> {
    let mut sinks: Vec<Arc<dyn NotificationSink>> = Vec::new();

    for channel in &settings.channels {
        match channel.as_str() {
            "console" => sinks.push(Arc::new(ConsoleSink)),
            "webhook" => {
                if settings.webhook_url.trim().is_empty() {
                    return Err(
                        "WEBHOOK_URL is required when the webhook channel is enabled".to_string()
                    );
                }
                sinks.push(Arc::new(WebhookSink::new(settings.webhook_url.clone())));
            }
            other => return Err(format!("unknown alert channel: {other}")),
        }
    }

    Ok(sinks)
}
