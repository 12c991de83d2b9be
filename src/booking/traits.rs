use crate::booking::types::{AuthorityReply, BookingRequest};
use crate::models::BusyInterval;
use anyhow::Result;
use async_trait::async_trait;

/// Seam to the calendar widget.
///
/// The widget itself lives outside this crate; it only needs to display busy
/// blocks handed to it and is configured to reject overlapping selections on
/// its own (see `CalendarSettings`).
pub trait CalendarView {
    /// Remove every busy block currently displayed
    fn clear(&mut self);

    /// Display one non-selectable busy block
    fn show_busy(&mut self, interval: BusyInterval);
}

/// Seam to the remote booking authority (the webhook).
///
/// Transport problems are an `Err`; a reply that arrived intact is `Ok`, even
/// when the authority rejected the booking — the coordinator inspects the
/// reply's success indicator, not the transport outcome.
#[async_trait]
pub trait BookingAuthority: Send + Sync {
    async fn send(&self, request: &BookingRequest) -> Result<AuthorityReply>;
}
