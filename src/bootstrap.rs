//! Application startup: create, install translations, mount.

use std::sync::Arc;

use thiserror::Error;

use crate::app::{
    App,
    AppError,
};
use crate::catalog::{
    self,
    CatalogError,
};
use crate::config::I18nSettings;
use crate::plugin::TranslationPlugin;
use crate::table::TranslationTable;

/// Root component name.
pub const ROOT_COMPONENT: &str = "App";

#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// App could not be mounted.
    #[error(transparent)]
    Mount(#[from] AppError),
}

/// The catalog used when no catalog file is configured.
#[must_use]
pub fn builtin_catalog() -> TranslationTable {
    TranslationTable::new().with(
        "zh",
        TranslationTable::new()
            .with("hello", "你好，世界")
            .with("welcome", "欢迎使用 Vue3 + Vite + Ant Design Vue + Vue Query 搭建的项目模板"),
    )
}

/// Catalog selected by `settings`.
pub fn load_catalog(settings: &I18nSettings) -> Result<TranslationTable, CatalogError> {
    settings
        .catalog_file
        .as_deref()
        .map_or_else(|| Ok(builtin_catalog()), catalog::load_catalog_file)
}

/// Create the app, install the translation plugin and mount it.
pub fn bootstrap(settings: &I18nSettings) -> Result<App, BootstrapError> {
    let table = load_catalog(settings)?;

    let mut app = App::new(ROOT_COMPONENT);
    tracing::debug!("App config: {:?}", app.config());

    app.use_plugin(&Arc::new(TranslationPlugin::from_settings(settings)), table);
    app.mount(&settings.mount_target)?;

    tracing::info!("Mounted '{}' on '{}'", app.root_component(), settings.mount_target);
    Ok(app)
}
