use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Assumed length of a property visit. The agenda feed carries no duration,
/// so every scheduled appointment blocks this much calendar time.
pub const DEFAULT_VISIT_DURATION_MIN: i64 = 60;

/// Geographic position and street address of a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Headline figures shown on a property card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specs {
    pub sqm: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

/// A listed property. Immutable after load; fetched once per page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub location: Location,
    /// Display string, rendered verbatim on the card
    pub price: String,
    pub specs: Specs,
    pub image: String,
}

/// Status of a visit appointment as reported by the agenda feed.
///
/// Only `Scheduled` occupies a slot; anything else (including statuses this
/// client does not know about) is ignored by the availability filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Completed,
    #[serde(other)]
    Other,
}

/// A visit appointment held by the remote agenda.
///
/// Appointments reference properties by exact title string; that is the
/// remote schema's join key, fragile to renames but not ours to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub property_title: String,
    pub timestamp: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// The calendar time this appointment occupies
    pub fn busy_interval(&self) -> BusyInterval {
        BusyInterval {
            start: self.timestamp,
            end: self.timestamp + Duration::minutes(DEFAULT_VISIT_DURATION_MIN),
        }
    }
}

/// A time range during which a property cannot be booked.
///
/// Derived projection only: recomputed from the store every time a booking
/// modal opens, never cached across property switches.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
