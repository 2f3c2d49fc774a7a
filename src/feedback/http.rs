use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};

use crate::{
    config::FeedbackConfig,
    feedback::{
        error::{FeedbackError, map_http_status, transport_failed},
        ports::{FeedbackDelivery, FeedbackTransport},
    },
};

#[derive(Clone)]
pub struct HttpFeedbackTransport {
    client: Client,
    timeout: Duration,
}

impl HttpFeedbackTransport {
    pub fn new(config: &FeedbackConfig) -> Result<Self, FeedbackError> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| transport_failed(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }
}

#[async_trait]
impl FeedbackTransport for HttpFeedbackTransport {
    async fn deliver(&self, delivery: FeedbackDelivery) -> Result<(), FeedbackError> {
        let response = self
            .client
            .post(&delivery.endpoint)
            .timeout(self.timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", delivery.bearer_token),
            )
            .json(&delivery.envelope)
            .send()
            .await
            .map_err(|err| transport_failed(format!("feedback request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_status(status, &body));
        }

        Ok(())
    }
}
