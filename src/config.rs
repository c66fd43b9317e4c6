use crate::error::{Result, TokenScoreError};
use crate::error_ext::ResultExt;
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://156.67.111.168:5000";

pub const APP_TITLE: &str = "TokenScore AI";
pub const APP_SUBTITLE: &str = "Crypto Market Analysis";
pub const ASSISTANT_NAME: &str = "CryptoAnalyst AI";
pub const SPINNER_MESSAGE: &str = "Analyzing cryptocurrencies...";
pub const FOOTER: &str = "Powered by TokenScore • Real-time Crypto Analysis";
pub const EMPTY_QUERY_WARNING: &str = "Please enter a question about specific cryptocurrencies.";

pub const EXAMPLE_QUERIES: &[&str] = &[
    "Compare Bitcoin and Ethereum technical indicators",
    "Should I invest in Solana and Cardano?",
    "Analyze BTC market trends",
];

const CONFIG_DIR: &str = ".tokenscore";
const CONFIG_FILE: &str = "config.toml";

/// Settings resolved once at startup and fixed for the process lifetime
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub render_markup: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
}

impl AppConfig {
    /// Flag/env value wins over the config file, which wins over the default.
    pub fn resolve(
        api_url: Option<String>,
        config_path: Option<&Path>,
        render_markup: bool,
    ) -> Result<Self> {
        let file_config = match config_path {
            Some(path) => load_file_config(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_file_config(&path)?,
                _ => FileConfig::default(),
            },
        };

        let raw_url = api_url
            .or(file_config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: parse_api_url(&raw_url)?,
            render_markup,
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| TokenScoreError::Config(format!("Invalid API URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TokenScoreError::Config(format!(
            "Unsupported API URL scheme '{}' (expected http or https)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = config_file("api_url = \"http://from-file:5000\"\n");
        let config = AppConfig::resolve(
            Some("http://from-flag:8080".to_string()),
            Some(file.path()),
            true,
        )
        .unwrap();

        assert_eq!(config.api_url.as_str(), "http://from-flag:8080/");
        assert!(config.render_markup);
    }

    #[test]
    fn test_file_overrides_default() {
        let file = config_file("api_url = \"https://analysis.example.com\"\n");
        let config = AppConfig::resolve(None, Some(file.path()), false).unwrap();

        assert_eq!(config.api_url.host_str(), Some("analysis.example.com"));
        assert!(!config.render_markup);
    }

    #[test]
    fn test_empty_file_falls_back_to_default() {
        let file = config_file("");
        let config = AppConfig::resolve(None, Some(file.path()), true).unwrap();

        assert_eq!(config.api_url, parse_api_url(DEFAULT_API_URL).unwrap());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let file = config_file("api_url = [1, 2]\n");
        let err = AppConfig::resolve(None, Some(file.path()), true).unwrap_err();

        assert!(matches!(err, TokenScoreError::Context { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::resolve(None, Some(&missing), true).is_err());
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            parse_api_url("not a url"),
            Err(TokenScoreError::Config(_))
        ));
        assert!(matches!(
            parse_api_url("ftp://example.com"),
            Err(TokenScoreError::Config(_))
        ));
    }
}
