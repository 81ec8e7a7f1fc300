mod language;
mod session;
mod transcript;
mod translation;
mod upload;

pub use language::LanguageCode;
pub use session::SessionId;
pub use transcript::{Transcript, UNKNOWN_LANGUAGE};
pub use translation::Translation;
pub use upload::ContainerFormat;
