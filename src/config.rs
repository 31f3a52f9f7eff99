//! Configuration handling for the quote form

use crate::webhook::DEFAULT_WEBHOOK_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the webhook address
pub const WEBHOOK_URL_ENV: &str = "PROAUTO_WEBHOOK_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteConfig {
    /// Webhook address receiving quote requests
    pub webhook_url: Option<String>,
    /// Request timeout in seconds; transport default when unset
    pub request_timeout_secs: Option<u64>,
}

impl QuoteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "proauto", "proauto-quote-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file, kept off the terminal the UI draws on
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("br", "proauto", "proauto-quote-tui")
            .map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: QuoteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Webhook address: environment, then config file, then the built-in default
    pub fn webhook_url(&self) -> String {
        self.resolve_webhook_url(std::env::var(WEBHOOK_URL_ENV).ok())
    }

    fn resolve_webhook_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.webhook_url.clone())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert!(config.webhook_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = QuoteConfig {
            webhook_url: Some("https://hooks.example.test/quotes".to_string()),
            request_timeout_secs: Some(15),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: QuoteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.webhook_url,
            Some("https://hooks.example.test/quotes".to_string())
        );
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: QuoteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.webhook_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 3, "unknown_field": "value"}"#;
        let parsed: QuoteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(3));
    }

    #[test]
    fn test_url_falls_back_to_default() {
        let config = QuoteConfig::default();
        assert_eq!(config.resolve_webhook_url(None), DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn test_file_url_beats_default() {
        let config = QuoteConfig {
            webhook_url: Some("https://file.example.test".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_webhook_url(None), "https://file.example.test");
    }

    #[test]
    fn test_env_url_beats_file() {
        let config = QuoteConfig {
            webhook_url: Some("https://file.example.test".to_string()),
            ..Default::default()
        };
        let url = config.resolve_webhook_url(Some("https://env.example.test".to_string()));
        assert_eq!(url, "https://env.example.test");
    }

    #[test]
    fn test_blank_env_url_is_ignored() {
        let config = QuoteConfig::default();
        assert_eq!(
            config.resolve_webhook_url(Some("  ".to_string())),
            DEFAULT_WEBHOOK_URL
        );
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuoteConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.webhook_url.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"webhook_url": "https://file.example.test", "request_timeout_secs": 8}"#,
        )
        .unwrap();

        let config = QuoteConfig::load_from(&path).unwrap();
        assert_eq!(config.resolve_webhook_url(None), "https://file.example.test");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = QuoteConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
