use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the "this month" total decides which expenses belong to the current period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodScope {
    /// Same month of the year, any year.
    #[default]
    MonthOfYear,
    /// Same year and month.
    CalendarMonth,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_sort: Option<String>,
    #[serde(default)]
    pub period_scope: PeriodScope,
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/spendlog/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("spendlog/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("spendlog\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("spendlog").join("expenses.json"))
                .unwrap_or_else(|| PathBuf::from("expenses.json"))
        })
    }

    pub fn effective_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_default_sort(&self) -> &str {
        self.default_sort.as_deref().unwrap_or("date")
    }

    pub fn effective_currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("₹")
    }
}
