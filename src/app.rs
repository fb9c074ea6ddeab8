//! Host application instance.
//!
//! Models the slice of a UI application the plugin system needs: plugin
//! installation, a string-keyed dependency-injection context, global template
//! helpers, and a one-shot mount.

use std::any::Any;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::sync::Arc;

use thiserror::Error;

use crate::plugin::Plugin;

/// A helper callable from every template scope.
pub type GlobalFn = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// `mount` was called a second time.
    #[error("App is already mounted on '{0}'")]
    AlreadyMounted(String),

    /// Blank mount selector.
    #[error("Invalid mount target: selector is empty")]
    InvalidSelector,
}

/// Application-wide configuration shared by every component.
#[derive(Default, Clone)]
pub struct AppConfig {
    /// Helpers reachable from every template scope, by name.
    global_properties: BTreeMap<String, GlobalFn>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("global_properties", &self.global_properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AppConfig {
    /// Registers a global helper, replacing any helper with the same name.
    pub fn set_global_property(&mut self, name: impl Into<String>, helper: GlobalFn) {
        let name = name.into();
        if self.global_properties.contains_key(&name) {
            tracing::warn!("Global property '{}' is being overwritten", name);
        }
        self.global_properties.insert(name, helper);
    }

    #[must_use]
    pub fn global_property(&self, name: &str) -> Option<&GlobalFn> {
        self.global_properties.get(name)
    }

    /// Names of all registered helpers, sorted.
    pub fn global_property_names(&self) -> impl Iterator<Item = &str> {
        self.global_properties.keys().map(String::as_str)
    }
}

/// A host application instance.
pub struct App {
    /// Name of the root component.
    root_component: String,
    /// Global configuration.
    config: AppConfig,
    /// Dependency-injection context.
    provides: HashMap<String, Arc<dyn Any + Send + Sync>>,
    /// Plugin instances already installed. Held so their addresses stay unique.
    installed_plugins: Vec<Arc<dyn Any + Send + Sync>>,
    /// Selector the app is mounted on, once mounted.
    mounted_on: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("root_component", &self.root_component)
            .field("config", &self.config)
            .field("provides", &self.provides.keys().collect::<Vec<_>>())
            .field("installed_plugins", &self.installed_plugins.len())
            .field("mounted_on", &self.mounted_on)
            .finish()
    }
}

impl App {
    #[must_use]
    pub fn new(root_component: impl Into<String>) -> Self {
        Self {
            root_component: root_component.into(),
            config: AppConfig::default(),
            provides: HashMap::new(),
            installed_plugins: Vec::new(),
            mounted_on: None,
        }
    }

    #[must_use]
    pub fn root_component(&self) -> &str {
        &self.root_component
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub const fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Install a plugin.
    ///
    /// Each plugin instance is installed at most once; later calls with the
    /// same instance are ignored. Distinct instances of one plugin type are
    /// installed independently.
    pub fn use_plugin<P: Plugin>(&mut self, plugin: &Arc<P>, options: P::Options) -> &mut Self {
        let already_installed = self
            .installed_plugins
            .iter()
            .any(|installed| std::ptr::addr_eq(Arc::as_ptr(installed), Arc::as_ptr(plugin)));

        if already_installed {
            tracing::warn!(
                "Plugin has already been applied to target app: {}",
                std::any::type_name::<P>()
            );
        } else {
            tracing::debug!("Installing plugin: {}", std::any::type_name::<P>());
            self.installed_plugins.push(Arc::clone(plugin) as Arc<dyn Any + Send + Sync>);
            plugin.install(self, options);
        }
        self
    }

    /// Make `value` available to [`Self::inject`] under `key`.
    pub fn provide<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: Arc<T>) {
        let key = key.into();
        if self.provides.contains_key(&key) {
            tracing::warn!("App already provides property with key '{}'. It will be overwritten", key);
        }
        self.provides.insert(key, value);
    }

    /// Look up a provided value. `None` if the key is unknown or holds another type.
    #[must_use]
    pub fn inject<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = self.provides.get(key)?;
        Arc::clone(value).downcast::<T>().ok()
    }

    /// Call a global helper the way a template would.
    #[must_use]
    pub fn call_global(&self, name: &str, arg: &str) -> Option<String> {
        self.config.global_property(name).and_then(|helper| helper(arg))
    }

    /// Mount the app on `selector`. Mounting happens once.
    pub fn mount(&mut self, selector: &str) -> Result<(), AppError> {
        if let Some(target) = &self.mounted_on {
            return Err(AppError::AlreadyMounted(target.clone()));
        }
        if selector.trim().is_empty() {
            return Err(AppError::InvalidSelector);
        }

        tracing::debug!("Mounting '{}' on '{}'", self.root_component, selector);
        self.mounted_on = Some(selector.to_string());
        Ok(())
    }

    #[must_use]
    pub fn mounted_on(&self) -> Option<&str> {
        self.mounted_on.as_deref()
    }
}
