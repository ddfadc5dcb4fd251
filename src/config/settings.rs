//! User settings for spendlens
//!
//! Report defaults and display preferences, persisted as `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::SpendlensPaths;
use crate::error::SpendlensError;
use crate::models::TimeWindow;
use crate::reports::{DEFAULT_DAY_LIMIT, DEFAULT_RECENT_LIMIT, DEFAULT_TREND_MONTHS};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Window applied when a report is run without `--window`
    #[serde(default)]
    pub default_window: TimeWindow,

    /// Months in the trend report
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Days kept in the daily spending series
    #[serde(default = "default_daily_limit")]
    pub daily_limit: usize,

    /// Recent transactions shown on the dashboard
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_trend_months() -> usize {
    DEFAULT_TREND_MONTHS
}

fn default_daily_limit() -> usize {
    DEFAULT_DAY_LIMIT
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_window: TimeWindow::default(),
            trend_months: default_trend_months(),
            daily_limit: default_daily_limit(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendlensPaths) -> Result<Self, SpendlensError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendlensError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendlensError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlensPaths) -> Result<(), SpendlensError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendlensError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SpendlensError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_window, TimeWindow::ThisMonth);
        assert_eq!(settings.trend_months, 6);
        assert_eq!(settings.daily_limit, 30);
        assert_eq!(settings.recent_limit, 10);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlensPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_window = TimeWindow::LastSixMonths;
        settings.trend_months = 12;

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"daily_limit": 7}"#).unwrap();
        assert_eq!(loaded.daily_limit, 7);
        assert_eq!(loaded.trend_months, 6);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlensPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendlensError::Config(_)));
    }
}
