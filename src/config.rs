use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REFRESH_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// CSV export URL of the shared sheet.
    SheetUrl(String),
    /// Local CSV copy, used in development and tests.
    CsvPath(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub source: SourceConfig,
    pub refresh: Duration,
}

impl Config {
    /// Reads configuration from the environment. A local file takes
    /// precedence over the remote export when both are set. Unparseable
    /// numbers fall back to defaults; a missing source is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let source = if let Ok(path) = env::var("SHEET_CSV_PATH") {
            SourceConfig::CsvPath(PathBuf::from(path))
        } else if let Ok(url) = env::var("SHEET_CSV_URL") {
            SourceConfig::SheetUrl(url)
        } else {
            return Err(ConfigError::MissingSource);
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let refresh_secs = env::var("SHEET_REFRESH_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS);

        Ok(Self {
            port,
            source,
            refresh: Duration::from_secs(refresh_secs),
        })
    }
}
