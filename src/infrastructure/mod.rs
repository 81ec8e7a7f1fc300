pub mod media;
pub mod observability;
pub mod recognition;
pub mod synthesis;
pub mod translation;
