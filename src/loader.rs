use crate::models::{Appointment, Property};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Fallback webhook endpoint when `config.json` does not name one
const DEFAULT_WEBHOOK_URL: &str = "https://hooks.example.com/webhook/agendar-visita";

/// Agency-level settings served next to the listing data
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyConfig {
    pub agency_name: String,
    pub agency_slogan: String,
    #[serde(default)]
    webhook_url: Option<String>,
}

impl AgencyConfig {
    pub fn webhook_url(&self) -> &str {
        self.webhook_url.as_deref().unwrap_or(DEFAULT_WEBHOOK_URL)
    }
}

/// Fetches the bootstrap data the page needs: agency config, the property
/// listing and the current visit agenda.
///
/// Config and properties are the critical path; without them there is
/// nothing to render. The agenda is not: if it cannot be fetched the
/// calendar is simply treated as fully free.
pub struct Loader {
    client: Client,
    base_url: String,
}

impl Loader {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("visita/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }

    pub async fn fetch_config(&self) -> Result<AgencyConfig> {
        self.fetch_json("config.json").await
    }

    pub async fn fetch_properties(&self) -> Result<Vec<Property>> {
        self.fetch_json("propiedades.json").await
    }

    /// Fetch the visit agenda, degrading to an empty list on any failure.
    /// A missing agenda only means no slot shows as busy; it must never
    /// take the page down.
    pub async fn fetch_appointments(&self) -> Vec<Appointment> {
        match self.fetch_json::<Vec<Appointment>>("citas.json").await {
            Ok(appointments) => appointments,
            Err(e) => {
                warn!("Agenda unavailable, treating calendar as free: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<T> {
        let url = self.url(file);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} returned status: {}", url, status);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;

    #[test]
    fn config_falls_back_to_the_default_webhook() {
        let config: AgencyConfig = serde_json::from_str(
            r#"{"agencyName": "Inmobiliaria Sol", "agencySlogan": "Tu hogar te espera"}"#,
        )
        .unwrap();
        assert_eq!(config.agency_name, "Inmobiliaria Sol");
        assert_eq!(config.webhook_url(), DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn config_prefers_its_own_webhook() {
        let config: AgencyConfig = serde_json::from_str(
            r#"{
                "agencyName": "Inmobiliaria Sol",
                "agencySlogan": "Tu hogar te espera",
                "webhookUrl": "https://hooks.example.com/webhook/custom"
            }"#,
        )
        .unwrap();
        assert_eq!(config.webhook_url(), "https://hooks.example.com/webhook/custom");
    }

    #[test]
    fn appointments_parse_from_the_wire_shape() {
        let appointments: Vec<Appointment> = serde_json::from_str(
            r#"[
                {"propertyTitle": "Casa A", "timestamp": "2024-06-01T10:00:00Z", "status": "scheduled"},
                {"propertyTitle": "Casa B", "timestamp": "2024-06-02T15:30:00Z", "status": "cancelled"}
            ]"#,
        )
        .unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].property_title, "Casa A");
        assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);
        assert_eq!(appointments[1].status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn unknown_appointment_status_still_parses() {
        let appointments: Vec<Appointment> = serde_json::from_str(
            r#"[{"propertyTitle": "Casa A", "timestamp": "2024-06-01T10:00:00Z", "status": "no-show"}]"#,
        )
        .unwrap();
        assert_eq!(appointments[0].status, AppointmentStatus::Other);
    }
}
