//! User settings stored as TOML.
//!
//! The settings file lives in the platform config folder:
//! - macOS: ~/Library/Application Support/com.product-catalog.Product Catalog/
//! - Windows: %APPDATA%/product-catalog/Product Catalog/config/
//! - Linux: ~/.config/productcatalog/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog_query::SortKey;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "product-catalog";
const APP_NAME: &str = "Product Catalog";
const CONFIG_FILENAME: &str = "settings.toml";

/// Used when no platform data folder can be determined.
const FALLBACK_DATA_DIR: &str = ".catalog";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the catalog is saved. Platform data folder when unset.
    pub data_dir: Option<PathBuf>,
    /// Sort order for `list` when `--sort` is not given.
    pub default_sort: SortKey,
    pub table_style: TableStyle,
}

/// Border style for tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Full,
    Condensed,
}

impl Settings {
    /// Pick the data directory: explicit override, then settings, then the
    /// platform default.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Default location of the settings file.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn default_data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Read settings from `path`. A missing file is `Ok(None)`.
pub fn read_settings(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load settings from `explicit` or the default location.
///
/// Never fails: a missing or broken file yields defaults.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(settings_path) else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match read_settings(&path) {
        Ok(Some(settings)) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Ok(None) => {
            if explicit.is_some() {
                tracing::warn!(path = %path.display(), "settings file not found, using defaults");
            } else {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
            }
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn parses_all_fields() {
        let settings: Settings = toml::from_str(
            r#"
            data_dir = "/srv/catalog"
            default_sort = "price_desc"
            table_style = "condensed"
            "#,
        )
        .unwrap();
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/catalog")));
        assert_eq!(settings.default_sort, SortKey::PriceDesc);
        assert_eq!(settings.table_style, TableStyle::Condensed);
    }

    #[test]
    fn round_trip() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("data")),
            default_sort: SortKey::NameAsc,
            table_style: TableStyle::Condensed,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert_eq!(toml::from_str::<Settings>(&text).unwrap(), settings);
    }

    #[test]
    fn override_wins_over_settings() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("from-settings")),
            ..Settings::default()
        };
        assert_eq!(
            settings.resolve_data_dir(Some(Path::new("from-flag"))),
            PathBuf::from("from-flag")
        );
        assert_eq!(
            settings.resolve_data_dir(None),
            PathBuf::from("from-settings")
        );
    }

    #[test]
    fn unknown_sort_key_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "default_sort = \"cheapest\"").unwrap();

        assert!(matches!(
            read_settings(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(read_settings(&path).unwrap().is_none());
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }
}
