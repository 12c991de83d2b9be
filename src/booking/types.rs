use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visitor contact details from the booking form.
///
/// Only presence is validated here; format checks are the form's job.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

/// Payload sent to the booking webhook.
///
/// Carries a denormalized snapshot of the property on purpose: the authority
/// has no property lookup of its own, so the record must be self-contained.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub property_title: String,
    pub property_address: String,
    pub property_lat: f64,
    pub property_lng: f64,
}

/// Body of the authority's reply. A 2xx transport response with
/// `success: false` is a domain rejection, not a success.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorityReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Returned to the caller after the authority accepted a booking
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub property_title: String,
    pub scheduled_for: DateTime<Utc>,
}

/// Why a submission did not produce a confirmed booking
#[derive(Debug, Error)]
pub enum BookingError {
    /// Local precondition failed; no network call was made
    #[error("{0}")]
    Validation(String),

    /// The authority explicitly refused, e.g. the slot was just taken
    #[error("{0}")]
    Rejected(String),

    /// Network error, non-2xx status, or an unreadable reply body
    #[error("{0}")]
    Transport(String),
}

/// Configuration handed to the calendar widget at bootstrap.
///
/// Overlap rejection happens natively in the widget; the booking session
/// never has to defend against overlapping selections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSettings {
    /// Weekdays open for visits (0 = Sunday)
    pub business_days: Vec<u8>,
    pub business_start: String,
    pub business_end: String,
    pub slot_min_time: String,
    pub slot_max_time: String,
    pub select_overlap: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            business_days: vec![1, 2, 3, 4, 5, 6],
            business_start: "09:00".to_string(),
            business_end: "18:00".to_string(),
            slot_min_time: "09:00:00".to_string(),
            slot_max_time: "19:00:00".to_string(),
            select_overlap: false,
        }
    }
}
