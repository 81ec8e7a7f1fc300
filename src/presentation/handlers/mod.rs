mod download;
mod health;
mod index;
mod languages;
mod translate;
mod upload;

pub use download::download_audio_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use languages::languages_handler;
pub use translate::translate_handler;
pub use upload::upload_handler;
