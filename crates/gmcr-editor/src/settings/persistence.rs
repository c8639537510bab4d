//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/org.gmcr.GMCR Editor/
//! - Windows: %APPDATA%/gmcr/GMCR Editor/config/
//! - Linux: ~/.config/gmcreditor/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::EditorSettings;
use crate::error::{EditorError, Result};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "gmcr";
const APP_NAME: &str = "GMCR Editor";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform location.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be read or parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings() -> EditorSettings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return EditorSettings::default();
    };

    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(EditorError::SettingsIo { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            EditorSettings::default()
        }
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            EditorSettings::default()
        }
    }
}

/// Load settings from an explicit file.
pub fn load_settings_from(path: &Path) -> Result<EditorSettings> {
    let content = fs::read_to_string(path).map_err(|source| EditorError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str(&content).map_err(|source| EditorError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Save settings to the platform location.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_settings(settings: &EditorSettings) -> Result<PathBuf> {
    let path = settings_path().ok_or(EditorError::ConfigDirUnavailable)?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

/// Save settings to an explicit file, creating its directory if needed.
pub fn save_settings_to(path: &Path, settings: &EditorSettings) -> Result<()> {
    let io_error = |source| EditorError::SettingsIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(io_error)?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
