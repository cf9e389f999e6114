//! Domain entities - core business objects

mod event;
mod registration;
mod session;
mod user;

pub use event::{Event, EventChanges, EventTiming, NewEvent};
pub use registration::{NewRegistration, Registration, RegistrationStatus};
pub use session::Session;
pub use user::{NewUser, User, UserChanges};
