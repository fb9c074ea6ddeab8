//! Plugin configuration: settings file and validation.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use types::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
