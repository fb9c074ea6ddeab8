//! Plugin contract and the translation plugin.

use std::sync::Arc;

use crate::app::App;
use crate::config::I18nSettings;
use crate::path::DEFAULT_SEPARATOR;
use crate::provider::TranslationProvider;
use crate::table::TranslationTable;

/// Key the catalog is provided under.
pub const I18N_PROVIDE_KEY: &str = "i18n";

/// Name of the global translation helper.
pub const TRANSLATE_GLOBAL_NAME: &str = "$translate";

/// Something a host application can install at startup.
pub trait Plugin: Send + Sync + 'static {
    /// Value handed to [`Plugin::install`].
    type Options;

    /// Called once by [`App::use_plugin`], before mounting.
    fn install(&self, app: &mut App, options: Self::Options);
}

/// Installs a catalog as shared state plus a global `$translate` helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPlugin {
    /// DI key for the catalog.
    provide_key: String,
    /// Name of the global helper.
    global_name: String,
    /// Path separator.
    separator: String,
}

impl Default for TranslationPlugin {
    fn default() -> Self {
        Self {
            provide_key: I18N_PROVIDE_KEY.to_string(),
            global_name: TRANSLATE_GLOBAL_NAME.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TranslationPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_settings(settings: &I18nSettings) -> Self {
        Self {
            provide_key: settings.provide_key.clone(),
            global_name: settings.global_name.clone(),
            separator: settings.key_separator.clone(),
        }
    }

    #[must_use]
    pub fn provide_key(&self) -> &str {
        &self.provide_key
    }

    #[must_use]
    pub fn global_name(&self) -> &str {
        &self.global_name
    }

    /// The translation context installed on `app`, if any.
    ///
    /// Shares the catalog the plugin provided; nothing is copied.
    #[must_use]
    pub fn provider(&self, app: &App) -> Option<TranslationProvider> {
        app.inject::<TranslationTable>(&self.provide_key)
            .map(|table| TranslationProvider::with_separator(table, &self.separator))
    }
}

impl Plugin for TranslationPlugin {
    type Options = TranslationTable;

    fn install(&self, app: &mut App, options: Self::Options) {
        let provider = TranslationProvider::with_separator(options, &self.separator);

        tracing::debug!(
            "Registering translations: key={:?}, global={:?}, entries={}",
            self.provide_key,
            self.global_name,
            provider.table().len()
        );

        app.provide(self.provide_key.clone(), Arc::clone(provider.table()));
        app.config_mut().set_global_property(
            self.global_name.clone(),
            Arc::new(move |path: &str| provider.translate(path).map(str::to_string)),
        );
    }
}

/// Install `table` on `app` with a new default plugin.
pub fn register(app: &mut App, table: TranslationTable) {
    app.use_plugin(&Arc::new(TranslationPlugin::default()), table);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[fixture]
    fn table() -> TranslationTable {
        TranslationTable::new().with(
            "zh",
            TranslationTable::new().with("hello", "你好，世界").with("welcome", "欢迎使用"),
        )
    }

    #[rstest]
    fn register_provides_table(table: TranslationTable) {
        let mut app = App::new("App");

        register(&mut app, table.clone());

        let injected = app.inject::<TranslationTable>(I18N_PROVIDE_KEY);
        assert_that!(injected.as_deref(), some(eq(&table)));
    }

    #[rstest]
    fn register_installs_translate_helper(table: TranslationTable) {
        let mut app = App::new("App");

        register(&mut app, table);

        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "zh.hello"), some(eq("你好，世界")));
        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "zh.missing"), none());
        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "en.hello"), none());
    }

    #[rstest]
    fn register_empty_table() {
        let mut app = App::new("App");

        register(&mut app, TranslationTable::new());

        assert_that!(app.inject::<TranslationTable>(I18N_PROVIDE_KEY), some(anything()));
        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "zh.hello"), none());
    }

    #[rstest]
    fn second_install_of_same_plugin_is_ignored(table: TranslationTable) {
        let plugin = Arc::new(TranslationPlugin::new());
        let mut app = App::new("App");

        app.use_plugin(&plugin, table)
            .use_plugin(&plugin, TranslationTable::new().with("zh", TranslationTable::new()));

        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "zh.hello"), some(eq("你好，世界")));
    }

    #[rstest]
    fn provider_shares_injected_table(table: TranslationTable) {
        let plugin = Arc::new(TranslationPlugin::new());
        let mut app = App::new("App");
        app.use_plugin(&plugin, table);

        let provider = plugin.provider(&app).unwrap();
        let injected = app.inject::<TranslationTable>(I18N_PROVIDE_KEY).unwrap();

        assert_that!(Arc::ptr_eq(provider.table(), &injected), eq(true));
        assert_that!(provider.translate("zh.welcome"), some(eq("欢迎使用")));
    }

    #[rstest]
    fn provider_before_install_is_none() {
        let app = App::new("App");

        assert_that!(TranslationPlugin::new().provider(&app), none());
    }

    #[rstest]
    fn plugin_from_settings(table: TranslationTable) {
        let settings = I18nSettings {
            key_separator: ":".to_string(),
            provide_key: "locale".to_string(),
            global_name: "$t".to_string(),
            ..I18nSettings::default()
        };
        let plugin = Arc::new(TranslationPlugin::from_settings(&settings));
        let mut app = App::new("App");

        app.use_plugin(&plugin, table);

        assert_that!(app.inject::<TranslationTable>("locale"), some(anything()));
        assert_that!(app.inject::<TranslationTable>(I18N_PROVIDE_KEY), none());
        assert_that!(app.call_global("$t", "zh:hello"), some(eq("你好，世界")));
        assert_that!(app.call_global("$t", "zh.hello"), none());
        assert_that!(app.call_global(TRANSLATE_GLOBAL_NAME, "zh:hello"), none());
    }

    #[rstest]
    fn differently_configured_plugins_install_side_by_side() {
        let first = Arc::new(TranslationPlugin::from_settings(&I18nSettings {
            provide_key: "a".to_string(),
            global_name: "$a".to_string(),
            ..I18nSettings::default()
        }));
        let second = Arc::new(TranslationPlugin::from_settings(&I18nSettings {
            provide_key: "b".to_string(),
            global_name: "$b".to_string(),
            ..I18nSettings::default()
        }));
        let mut app = App::new("App");

        app.use_plugin(&first, TranslationTable::new().with("x", "A"))
            .use_plugin(&second, TranslationTable::new().with("x", "B"));

        assert_that!(app.call_global("$a", "x"), some(eq("A")));
        assert_that!(app.call_global("$b", "x"), some(eq("B")));
        assert_that!(app.inject::<TranslationTable>("a"), some(anything()));
        assert_that!(app.inject::<TranslationTable>("b"), some(anything()));
    }
}
