/// User settings
///
/// Settings live in a JSON file in the user's config directory:
/// - Linux: ~/.config/image-carousel/settings.json
/// - macOS: ~/Library/Application Support/image-carousel/settings.json
/// - Windows: %APPDATA%\image-carousel\settings.json
///
/// Every field is optional. A missing file means defaults.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::stats::DEFAULT_TOP_K;

const APP_DIR: &str = "image-carousel";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed settings {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the image files referenced by the catalog
    pub assets_dir: Option<PathBuf>,
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// How many characters the statistics sheet lists
    pub top_k: usize,
    pub dark_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: None,
            catalog_path: None,
            top_k: DEFAULT_TOP_K,
            dark_theme: true,
        }
    }
}

impl Settings {
    /// Load settings from the user's config directory
    ///
    /// Never fails: problems are logged and defaults are used.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::from_file(&path) {
            Ok(Some(settings)) => {
                tracing::info!("⚙️  Settings loaded from {}", path.display());
                settings
            }
            Ok(None) => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from a file, `Ok(None)` if it doesn't exist
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    /// The configured assets directory, or the default one in the data directory
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("assets")
        })
    }
}

/// Get the path where the settings file is expected
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("settings.json")
}

/// Get the thumbnail cache directory
/// Returns ~/.cache/image-carousel/thumbnails on Linux
pub fn thumbnail_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("thumbnails")
}
