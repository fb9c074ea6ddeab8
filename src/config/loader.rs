//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// ワークスペース直下の設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".i18n-plugin.json";

/// 起動時の設定を読み込む
///
/// 設定ファイルがなければデフォルト値を使う。読み込んだ設定はバリデーション済み。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(workspace_root: &Path) -> Result<I18nSettings, ConfigError> {
    let settings = load_from_workspace(workspace_root)?.unwrap_or_default();

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded: {:?}", settings);

    Ok(settings)
}

/// ワークスペースから設定を読み込む
///
/// `.i18n-plugin.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let mut settings: I18nSettings = serde_json::from_str(&content)?;

    // カタログファイルはワークスペースからの相対パス
    if let Some(catalog_file) = &settings.catalog_file
        && catalog_file.is_relative()
        && !catalog_file.as_os_str().is_empty()
    {
        settings.catalog_file = Some(workspace_root.join(catalog_file));
    }

    Ok(Some(settings))
}
