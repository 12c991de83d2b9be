pub mod session;
pub mod submit;
pub mod traits;
pub mod types;
pub mod webhook;

pub use session::BookingSession;
pub use submit::SubmissionCoordinator;
pub use traits::{BookingAuthority, CalendarView};
pub use types::{BookingError, CalendarSettings, Confirmation, ContactInfo};
pub use webhook::WebhookAuthority;
