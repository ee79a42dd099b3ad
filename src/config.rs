use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{deep_link, PhoneDetector, PhoneNormalizer, DEFAULT_COUNTRY_CODE, DEFAULT_LINK_BASE};
use crate::error::WaResult;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prepended to numbers typed without a leading `+`
    pub country_code: String,
    pub link_base: String,
    /// "system" or "dry-run"
    pub opener: String,
    pub clipboard_strip_separators: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            opener: "system".to_string(),
            clipboard_strip_separators: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or use defaults
    pub fn load() -> WaResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`. A missing file yields defaults; a corrupt
    /// one is moved aside and defaults are used.
    pub fn load_from(path: &Path) -> WaResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> WaResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> WaResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the values the launcher depends on
    pub fn validate(&self) -> WaResult<()> {
        PhoneNormalizer::new(&self.country_code)?;
        deep_link::validate_base(&self.link_base)?;
        Ok(())
    }

    pub fn normalizer(&self) -> WaResult<PhoneNormalizer> {
        PhoneNormalizer::new(&self.country_code)
    }

    pub fn detector(&self) -> PhoneDetector {
        PhoneDetector::new(self.clipboard_strip_separators)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("waopen")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.country_code, "+972");
        assert_eq!(config.link_base, "https://wa.me");
        assert_eq!(config.opener, "system");
        assert!(!config.clipboard_strip_separators);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"country_code":"+44"}"#).unwrap();
        assert_eq!(config.country_code, "+44");
        assert_eq!(config.link_base, "https://wa.me");
        assert_eq!(config.normalizer().unwrap().normalize("7700"), "+447700");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");

        let config = Config {
            country_code: "+1".to_string(),
            clipboard_strip_separators: true,
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_corrupt_file_is_moved_aside() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        // A directory exists but cannot be read as a file
        let result = Config::load_from(dir.path());
        assert!(matches!(result, Err(crate::error::WaError::Io(_))));
    }

    #[test]
    fn test_save_into_file_parent_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = Config::default().save_to(&blocker.join("config.json"));
        assert!(matches!(result, Err(crate::error::WaError::Io(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_code = Config {
            country_code: "972".to_string(),
            ..Config::default()
        };
        assert!(bad_code.validate().is_err());

        let bad_base = Config {
            link_base: "wa.me".to_string(),
            ..Config::default()
        };
        assert!(bad_base.validate().is_err());
    }
}
