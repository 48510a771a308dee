use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use tokio::time::sleep;

/// Outbound HTTP client with a fixed delay between consecutive requests,
/// shared by the collaborator APIs.
pub struct OutboundClient {
    client: Client,
    delay: Duration,
    requests_sent: usize,
}

impl OutboundClient {
    pub fn new(user_agent: &str, timeout_secs: u64, delay_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            delay: Duration::from_millis(delay_ms),
            requests_sent: 0,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<Response> {
        self.pace().await;
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }

    pub async fn post_json<T: Serialize>(&mut self, url: &str, body: &T) -> Result<Response> {
        self.pace().await;
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send POST request")
    }

    async fn pace(&mut self) {
        if self.requests_sent > 0 {
            sleep(self.delay).await;
        }
        self.requests_sent += 1;
    }
}
