mod error;
mod service;

pub use error::SettingsError;
pub use service::SettingsService;
