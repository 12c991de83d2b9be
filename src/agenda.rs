use crate::models::{Appointment, AppointmentStatus, BusyInterval};

/// Owns the list of visit appointments for every property.
///
/// Filled once at load time from the remote agenda, then appended to only by
/// the submission coordinator after the webhook confirms a booking. The
/// calendar view never mutates this directly.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Record a confirmed appointment. Only called after the remote authority
    /// has accepted the booking, never speculatively.
    pub fn append(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Busy intervals for one property, derived fresh on every call.
    ///
    /// Matches on exact title equality (the agenda's join key) and only
    /// counts `scheduled` appointments. A title mismatch silently drops the
    /// appointment from blocking. Emission order is unspecified.
    pub fn busy_intervals<'a>(
        &'a self,
        property_title: &'a str,
    ) -> impl Iterator<Item = BusyInterval> + 'a {
        self.appointments
            .iter()
            .filter(move |a| {
                a.property_title == property_title && a.status == AppointmentStatus::Scheduled
            })
            .map(Appointment::busy_interval)
    }
}
