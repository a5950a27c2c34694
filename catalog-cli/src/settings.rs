use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use catalog_client::{ClientConfig, DEFAULT_API_URL};

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub log_level: String,
    pub http_connect_timeout_secs: u64,
    pub http_request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("CATALOG_API_URL")
            .map(|value| value.trim().to_string())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let http_connect_timeout_secs = parse_u64_env("HTTP_CONNECT_TIMEOUT_SECS", 5)?;
        let http_request_timeout_secs = parse_u64_env("HTTP_REQUEST_TIMEOUT_SECS", 15)?;

        Ok(Self {
            api_url,
            log_level,
            http_connect_timeout_secs,
            http_request_timeout_secs,
        })
    }

    /// Параметры клиента; `api_override` (флаг `--api`) важнее окружения.
    pub fn client_config(&self, api_override: Option<String>) -> ClientConfig {
        let raw = api_override.unwrap_or_else(|| self.api_url.clone());
        ClientConfig {
            base_url: normalize_api_url(raw),
            connect_timeout: Duration::from_secs(self.http_connect_timeout_secs),
            request_timeout: Duration::from_secs(self.http_request_timeout_secs),
        }
    }
}

pub fn normalize_api_url(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url;
    }

    format!("https://{url}")
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = match std::env::var(key) {
        Ok(raw) => parse_positive_u64(key, &raw)?,
        Err(_) => default,
    };
    Ok(value)
}

fn parse_positive_u64(key: &str, raw: &str) -> Result<u64> {
    let value = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "warn".to_string(),
            http_connect_timeout_secs: 5,
            http_request_timeout_secs: 15,
        }
    }

    #[test]
    fn normalize_api_url_keeps_scheme() {
        let url = normalize_api_url("http://localhost:3000".to_string());
        assert_eq!(url, "http://localhost:3000");
    }

    #[test]
    fn normalize_api_url_adds_https_scheme() {
        let url = normalize_api_url("jsonplaceholder.typicode.com".to_string());
        assert_eq!(url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn client_config_prefers_override() {
        let config = settings().client_config(Some("localhost:3000".to_string()));
        assert_eq!(config.base_url, "https://localhost:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn client_config_falls_back_to_settings() {
        let config = settings().client_config(None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn parse_positive_u64_rejects_zero_and_text() {
        assert!(parse_positive_u64("X", "0").is_err());
        assert!(parse_positive_u64("X", "ten").is_err());
        assert_eq!(parse_positive_u64("X", " 7 ").expect("must parse"), 7);
    }
}
