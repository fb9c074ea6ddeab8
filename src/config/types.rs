use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::path::DEFAULT_SEPARATOR;
use crate::plugin::{
    I18N_PROVIDE_KEY,
    TRANSLATE_GLOBAL_NAME,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered, one-per-line rendering of validation errors.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub key_separator: String,

    /// Key the catalog is provided under for injection.
    pub provide_key: String,

    /// Name of the global helper; must start with `$`.
    pub global_name: String,

    /// Catalog file, relative to the workspace root.
    /// If unset, the built-in catalog is used.
    pub catalog_file: Option<PathBuf>,

    pub mount_target: String,
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Global name without `$` prefix
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.provide_key.is_empty() {
            errors.push(ValidationError::new(
                "provideKey",
                "The provide key cannot be empty. Example: \"i18n\"",
            ));
        }

        if self.global_name.len() < 2 || !self.global_name.starts_with('$') {
            errors.push(ValidationError::new(
                "globalName",
                format!(
                    "Invalid global name '{}': it must start with '$' followed by a name. Example: \"$translate\"",
                    self.global_name
                ),
            ));
        }

        if let Some(path) = &self.catalog_file
            && path.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "catalogFile",
                "The path cannot be empty. Please specify a file, or remove this field",
            ));
        }

        if self.mount_target.trim().is_empty() {
            errors.push(ValidationError::new(
                "mountTarget",
                "The mount target cannot be empty. Example: \"#app\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            key_separator: DEFAULT_SEPARATOR.to_string(),
            provide_key: I18N_PROVIDE_KEY.to_string(),
            global_name: TRANSLATE_GLOBAL_NAME.to_string(),
            catalog_file: None,
            mount_target: "#app".to_string(),
        }
    }
}
