//! Application configuration structures.

use std::fs;
use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet location and well-known tab names
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Sheet cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.sheets.document_id.trim().is_empty() {
            return Err(AppError::validation("sheets.document_id is empty"));
        }
        if self.sheets.login_sheet.trim().is_empty() {
            return Err(AppError::validation("sheets.login_sheet is empty"));
        }
        Url::parse(&self.sheets.base_url).map_err(|e| {
            AppError::validation(format!(
                "sheets.base_url '{}' is not a valid URL: {e}",
                self.sheets.base_url
            ))
        })?;
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheets: SheetsConfig::default(),
            http: HttpConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Location of the published spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet host prefix, without the document id
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Document id as it appears in the edit URL
    #[serde(default = "defaults::document_id")]
    pub document_id: String,

    /// Tab holding the MASP/NOME roster
    #[serde(default = "defaults::login_sheet")]
    pub login_sheet: String,
}

impl SheetsConfig {
    /// CSV export endpoint for this document.
    ///
    /// The sheet name is appended later as the `sheet` query parameter.
    pub fn export_url(&self) -> Result<Url> {
        let mut url = self.document_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("sheets.base_url cannot be a base"))?
            .extend(["gviz", "tq"]);
        url.query_pairs_mut().append_pair("tqx", "out:csv");
        Ok(url)
    }

    /// Edit page of the document, used for sheet discovery.
    pub fn edit_url(&self) -> Result<Url> {
        let mut url = self.document_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("sheets.base_url cannot be a base"))?
            .push("edit");
        Ok(url)
    }

    fn document_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("sheets.base_url cannot be a base"))?
            .pop_if_empty()
            .push(self.document_id.trim());
        Ok(url)
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            document_id: defaults::document_id(),
            login_sheet: defaults::login_sheet(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent sheet requests when surveying every class
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Sheet cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a fetched sheet stays fresh. Zero disables reuse.
    #[serde(default = "defaults::ttl")]
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> TimeDelta {
        i64::try_from(self.ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::ttl(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is not set
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Sheets defaults
    pub fn base_url() -> String {
        "https://docs.google.com/spreadsheets/d".into()
    }
    pub fn document_id() -> String {
        "14PkGTt0fy5FWd4QeH-DkJCJqdfqJn9r0GDcecAHyqYc".into()
    }
    pub fn login_sheet() -> String {
        "Login".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; gabarito/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // Cache defaults
    pub fn ttl() -> u64 {
        5 * 60
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_document_id() {
        let mut config = Config::default();
        config.sheets.document_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.sheets.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_ttl_is_five_minutes() {
        assert_eq!(CacheConfig::default().ttl(), TimeDelta::minutes(5));
    }

    #[test]
    fn export_url_points_at_csv_endpoint() {
        let sheets = SheetsConfig {
            base_url: "https://docs.google.com/spreadsheets/d/".to_string(),
            document_id: "abc".to_string(),
            login_sheet: "Login".to_string(),
        };
        assert_eq!(
            sheets.export_url().unwrap().as_str(),
            "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out%3Acsv"
        );
        assert_eq!(
            sheets.edit_url().unwrap().as_str(),
            "https://docs.google.com/spreadsheets/d/abc/edit"
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[cache]\nttl_secs = 10\n").unwrap();
        assert_eq!(config.cache.ttl_secs, 10);
        assert_eq!(config.sheets.login_sheet, "Login");
        assert_eq!(config.http.timeout_secs, 30);
    }
}
