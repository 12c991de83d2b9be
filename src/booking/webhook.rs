use crate::booking::traits::BookingAuthority;
use crate::booking::types::{AuthorityReply, BookingRequest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// The remote booking authority, reached over a single webhook POST.
///
/// One request per submission, no automatic retry. A hung request is cut off
/// by the client timeout and surfaces as a transport failure.
pub struct WebhookAuthority {
    client: Client,
    url: String,
}

impl WebhookAuthority {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("visita/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BookingAuthority for WebhookAuthority {
    async fn send(&self, request: &BookingRequest) -> Result<AuthorityReply> {
        debug!("POST {} for '{}'", self.url, request.property_title);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .context("Failed to reach booking webhook")?;

        let status = response.status();
        if !status.is_success() {
            warn!("Booking webhook returned status: {}", status);
            anyhow::bail!("Booking webhook returned status: {}", status);
        }

        // Transport success is not enough; the caller checks the body's
        // success indicator. An unreadable body counts as transport failure.
        let reply = response
            .json::<AuthorityReply>()
            .await
            .context("Failed to parse webhook reply")?;

        Ok(reply)
    }
}
