mod dubbing_service;
mod intake_service;
mod session_registry;

pub use dubbing_service::{DubbingError, DubbingService};
pub use intake_service::{IntakeError, IntakeOutcome, IntakeService};
pub use session_registry::{Session, SessionNotFound, SessionRegistry};
