pub mod app_config;
pub mod config;
pub mod error;
pub mod platforms;
pub mod records;

pub use app_config::{AppConfig, ScoutOptions};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use platforms::PlatformSet;
pub use records::{ProductRecord, Review, ReviewKind, SearchCandidate};
