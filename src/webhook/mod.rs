use crate::http::{HttpClient, ResponseHandler};
use serde::Serialize;
use std::env;

const WEBHOOK_URL_ENV: &str = "WEBHOOK_URL";

#[derive(Debug, Serialize)]
struct Payload<'p> {
    text: &'p str,
}

/// Delivers the run summary to the configured chat webhooks
pub struct WebhookNotifier {
    urls: Vec<String>,
}

impl WebhookNotifier {
    /// Reads the webhook URLs from the environment, one or more separated
    /// by commas. Returns `None` when nothing usable is configured
    pub fn from_env() -> Option<Self> {
        env::var(WEBHOOK_URL_ENV)
            .ok()
            .and_then(|value| WebhookNotifier::parse(&value))
    }

    fn parse(value: &str) -> Option<Self> {
        let urls: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        if urls.is_empty() {
            return None;
        }

        Some(WebhookNotifier::new(urls))
    }

    pub fn new(urls: Vec<String>) -> Self {
        WebhookNotifier { urls }
    }

    /// Posts the message to every configured webhook. A failed delivery is
    /// logged and does not stop delivery to the remaining webhooks
    pub async fn send(&self, text: &str) {
        let payload = Payload { text };

        for url in &self.urls {
            log::debug!("Sending notification");

            let response = HttpClient::new().post(url).json(&payload).send().await;

            if let Err(e) = response.handle().await {
                log::error!("Failed to deliver notification: {}", e);
            }
        }
    }
}
