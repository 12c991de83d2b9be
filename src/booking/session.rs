use crate::agenda::AppointmentStore;
use crate::booking::traits::CalendarView;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Lifecycle of one booking interaction.
///
/// `Closed → Open → SlotSelected → Submitting`, then back to `Closed` on
/// success or `SlotSelected` on failure so the visitor can retry without
/// reopening the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Closed,
    Open,
    SlotSelected(DateTime<Utc>),
    Submitting(DateTime<Utc>),
}

/// Tracks one in-progress booking attempt for a single property, from
/// modal-open to submit-or-cancel. Exists only while the modal is open.
#[derive(Debug)]
pub struct BookingSession {
    property_id: i64,
    property_title: String,
    state: SessionState,
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            property_id: 0,
            property_title: String::new(),
            state: SessionState::Closed,
        }
    }

    /// Start a booking attempt for a property.
    ///
    /// Discards any previous selection, then repopulates the calendar view
    /// with this property's busy intervals. The view is cleared before the
    /// first interval is shown so stale blocks from another property can
    /// never appear alongside the new ones.
    pub fn open(
        &mut self,
        property_id: i64,
        property_title: &str,
        store: &AppointmentStore,
        view: &mut dyn CalendarView,
    ) {
        debug!("Opening booking session for '{}'", property_title);

        self.property_id = property_id;
        self.property_title = property_title.to_string();
        self.state = SessionState::Open;

        view.clear();
        for interval in store.busy_intervals(property_title) {
            view.show_busy(interval);
        }
    }

    /// Record the slot the visitor picked on the calendar.
    ///
    /// Returns a human-readable echo of the selection for the feedback
    /// toast, or `None` when there is no open session to attach it to (or a
    /// submission is already in flight). Overlap with busy intervals is
    /// rejected natively by the calendar widget, not re-checked here.
    pub fn select_slot(&mut self, start: DateTime<Utc>) -> Option<String> {
        match self.state {
            SessionState::Open | SessionState::SlotSelected(_) => {
                self.state = SessionState::SlotSelected(start);
                Some(format!(
                    "Fecha seleccionada: {}",
                    start.format("%d-%m-%Y %H:%M hrs")
                ))
            }
            SessionState::Closed | SessionState::Submitting(_) => None,
        }
    }

    /// Discard the session unconditionally. Used both for explicit cancel
    /// and for cleanup after a confirmed booking.
    pub fn close(&mut self) {
        self.property_id = 0;
        self.property_title.clear();
        self.state = SessionState::Closed;
    }

    pub fn property(&self) -> Option<(i64, &str)> {
        match self.state {
            SessionState::Closed => None,
            _ => Some((self.property_id, self.property_title.as_str())),
        }
    }

    pub fn selected_slot(&self) -> Option<DateTime<Utc>> {
        match self.state {
            SessionState::SlotSelected(slot) | SessionState::Submitting(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    /// Enter the in-flight state. Caller must have verified a slot is
    /// selected; while submitting, further submits and slot picks are
    /// ignored.
    pub(crate) fn begin_submit(&mut self) {
        if let SessionState::SlotSelected(slot) = self.state {
            self.state = SessionState::Submitting(slot);
        }
    }

    /// Return to `SlotSelected` after a rejected or failed submission,
    /// preserving the selection for a retry.
    pub(crate) fn abort_submit(&mut self) {
        if let SessionState::Submitting(slot) = self.state {
            self.state = SessionState::SlotSelected(slot);
        }
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Appointment, AppointmentStatus, BusyInterval};

    /// Records every call so tests can assert on operation ordering
    #[derive(Default)]
    struct RecordingView {
        ops: Vec<ViewOp>,
    }

    #[derive(Debug, PartialEq, Eq)]
    enum ViewOp {
        Clear,
        Busy(BusyInterval),
    }

    impl CalendarView for RecordingView {
        fn clear(&mut self) {
            self.ops.push(ViewOp::Clear);
        }

        fn show_busy(&mut self, interval: BusyInterval) {
            self.ops.push(ViewOp::Busy(interval));
        }
    }

    fn scheduled(title: &str, when: &str) -> Appointment {
        Appointment {
            property_title: title.to_string(),
            timestamp: when.parse().unwrap(),
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn open_shows_exactly_the_target_property_intervals() {
        let store = AppointmentStore::new(vec![
            scheduled("Casa A", "2024-06-01T10:00:00Z"),
            scheduled("Casa B", "2024-06-01T11:00:00Z"),
        ]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);

        let busy: Vec<_> = view
            .ops
            .iter()
            .filter(|op| matches!(op, ViewOp::Busy(_)))
            .collect();
        assert_eq!(busy.len(), 1);
        assert_eq!(
            busy[0],
            &ViewOp::Busy(scheduled("Casa A", "2024-06-01T10:00:00Z").busy_interval())
        );
    }

    #[test]
    fn open_clears_before_populating() {
        let store = AppointmentStore::new(vec![
            scheduled("Casa A", "2024-06-01T10:00:00Z"),
            scheduled("Casa B", "2024-06-02T11:00:00Z"),
        ]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        session.open(2, "Casa B", &store, &mut view);

        // Every populate run starts with a clear, so blocks from the prior
        // property can never be visible next to the new ones.
        assert_eq!(view.ops[0], ViewOp::Clear);
        let second_clear = view.ops.iter().rposition(|op| *op == ViewOp::Clear).unwrap();
        let after: Vec<_> = view.ops.iter().skip(second_clear + 1).collect();
        assert_eq!(
            after,
            vec![&ViewOp::Busy(
                scheduled("Casa B", "2024-06-02T11:00:00Z").busy_interval()
            )]
        );
    }

    #[test]
    fn reopening_discards_previous_selection() {
        let store = AppointmentStore::new(vec![]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        session.select_slot("2024-06-01T10:00:00Z".parse().unwrap());
        session.open(2, "Casa B", &store, &mut view);

        assert_eq!(session.selected_slot(), None);
        assert_eq!(session.property(), Some((2, "Casa B")));
    }

    #[test]
    fn select_slot_echoes_the_choice() {
        let store = AppointmentStore::new(vec![]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        let feedback = session.select_slot("2024-06-01T10:00:00Z".parse().unwrap());

        assert_eq!(
            feedback.as_deref(),
            Some("Fecha seleccionada: 01-06-2024 10:00 hrs")
        );
        assert_eq!(
            session.selected_slot(),
            Some("2024-06-01T10:00:00Z".parse().unwrap())
        );
    }

    #[test]
    fn select_slot_on_closed_session_is_ignored() {
        let mut session = BookingSession::new();
        assert_eq!(session.select_slot(Utc::now()), None);
        assert_eq!(session.selected_slot(), None);
    }

    #[test]
    fn select_slot_while_submitting_is_ignored() {
        let store = AppointmentStore::new(vec![]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        let original: DateTime<Utc> = "2024-06-01T10:00:00Z".parse().unwrap();
        session.select_slot(original);
        session.begin_submit();

        assert_eq!(session.select_slot("2024-06-02T10:00:00Z".parse().unwrap()), None);
        assert_eq!(session.selected_slot(), Some(original));
    }

    #[test]
    fn close_discards_everything() {
        let store = AppointmentStore::new(vec![]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        session.select_slot("2024-06-01T10:00:00Z".parse().unwrap());
        session.close();

        assert_eq!(session.property(), None);
        assert_eq!(session.selected_slot(), None);
        assert!(!session.is_submitting());
    }

    #[test]
    fn abort_submit_preserves_the_selection() {
        let store = AppointmentStore::new(vec![]);
        let mut view = RecordingView::default();
        let mut session = BookingSession::new();

        session.open(1, "Casa A", &store, &mut view);
        let slot: DateTime<Utc> = "2024-06-01T10:00:00Z".parse().unwrap();
        session.select_slot(slot);
        session.begin_submit();
        assert!(session.is_submitting());

        session.abort_submit();
        assert!(!session.is_submitting());
        assert_eq!(session.selected_slot(), Some(slot));
    }
}
