use crate::agenda::AppointmentStore;
use crate::booking::session::BookingSession;
use crate::booking::traits::{BookingAuthority, CalendarView};
use crate::booking::types::{BookingError, BookingRequest, Confirmation, ContactInfo};
use crate::models::{Appointment, AppointmentStatus, Property};
use tracing::{info, warn};

/// Drives one submission to the remote booking authority.
///
/// The authority is the source of truth: the local store and calendar view
/// are only touched after it explicitly confirms, never speculatively, and a
/// rejection requires a fresh user-initiated submit.
pub struct SubmissionCoordinator<A: BookingAuthority> {
    authority: A,
}

impl<A: BookingAuthority> SubmissionCoordinator<A> {
    pub fn new(authority: A) -> Self {
        Self { authority }
    }

    /// Submit the current booking attempt.
    ///
    /// All preconditions are checked before any network traffic: a slot must
    /// be selected, the contact fields must be filled in, and the session's
    /// property must resolve in `properties` (the payload carries a
    /// denormalized snapshot of it). On success the appointment is appended
    /// to the store, pushed to the calendar view and the session closed; on
    /// any failure both are left untouched and the selection survives for a
    /// retry.
    pub async fn submit(
        &self,
        session: &mut BookingSession,
        store: &mut AppointmentStore,
        view: &mut dyn CalendarView,
        properties: &[Property],
        contact: &ContactInfo,
    ) -> Result<Confirmation, BookingError> {
        if session.is_submitting() {
            return Err(BookingError::Validation(
                "Tu solicitud ya se está enviando.".to_string(),
            ));
        }

        let (property_id, _) = session.property().ok_or_else(|| {
            BookingError::Validation("No hay ninguna reserva en curso.".to_string())
        })?;

        let slot = session.selected_slot().ok_or_else(|| {
            BookingError::Validation(
                "Por favor, selecciona una fecha y hora en el calendario.".to_string(),
            )
        })?;

        if !contact.is_complete() {
            return Err(BookingError::Validation(
                "Completa tu nombre, correo y teléfono.".to_string(),
            ));
        }

        let property = properties
            .iter()
            .find(|p| p.id == property_id)
            .ok_or_else(|| {
                BookingError::Validation(
                    "No se encontró la propiedad seleccionada.".to_string(),
                )
            })?;

        let request = BookingRequest {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            date: slot,
            property_title: property.title.clone(),
            property_address: property.location.address.clone(),
            property_lat: property.location.lat,
            property_lng: property.location.lng,
        };

        session.begin_submit();
        info!("Submitting visit request for '{}' at {}", property.title, slot);

        let reply = match self.authority.send(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Booking submission failed in transit: {:#}", e);
                session.abort_submit();
                return Err(BookingError::Transport(
                    "Hubo un error al agendar tu visita. Por favor, intenta de nuevo."
                        .to_string(),
                ));
            }
        };

        if !reply.success {
            let message = reply
                .message
                .unwrap_or_else(|| "La solicitud fue rechazada.".to_string());
            info!("Authority rejected the booking: {}", message);
            session.abort_submit();
            return Err(BookingError::Rejected(message));
        }

        // Confirmed by the authority; now the optimistic local update.
        let appointment = Appointment {
            property_title: property.title.clone(),
            timestamp: slot,
            status: AppointmentStatus::Scheduled,
        };
        view.show_busy(appointment.busy_interval());
        store.append(appointment);
        session.close();

        info!("Visit confirmed for '{}' at {}", property.title, slot);
        Ok(Confirmation {
            property_title: property.title.clone(),
            scheduled_for: slot,
        })
    }
}
