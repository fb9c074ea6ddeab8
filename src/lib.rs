//! i18n-plugin
//!
//! Dotted-path translation lookup, installed into a host application as a
//! plugin: the catalog is provided under `"i18n"` and a `$translate` helper is
//! registered for every template scope.

pub mod app;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod path;
pub mod plugin;
pub mod provider;
pub mod table;

pub use app::App;
pub use path::DottedPath;
pub use plugin::{
    Plugin,
    TranslationPlugin,
    register,
};
pub use provider::{
    Entry,
    LookupError,
    TranslationProvider,
};
pub use table::{
    TranslationTable,
    TranslationValue,
};
