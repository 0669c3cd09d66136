use std::env;
use std::time::Duration;

use crate::domain::tenant::DEFAULT_EXCLUDED_TENANT;
use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://app.atera.com/api/v3";
const ENV_API_KEY: &str = "ATERA_API_KEY";
const ENV_BASE_URL: &str = "ATERA_BASE_URL";
const ENV_EXCLUDED_TENANT: &str = "TICKETBOARD_EXCLUDED_TENANT";
const ENV_REQUEST_TIMEOUT: &str = "TICKETBOARD_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub excluded_tenant: i64,
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn load() -> AppResult<Self> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            return Err(AppError::Configuration(format!("invalid .env file: {err}")));
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read(ENV_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let excluded_tenant = read(ENV_EXCLUDED_TENANT)
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    AppError::Configuration(format!("{ENV_EXCLUDED_TENANT} must be an integer"))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_EXCLUDED_TENANT);

        let request_timeout = read(ENV_REQUEST_TIMEOUT)
            .map(|raw| match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(AppError::Configuration(format!(
                    "{ENV_REQUEST_TIMEOUT} must be a positive integer"
                ))),
            })
            .transpose()?;

        Ok(Self {
            api_key: read(ENV_API_KEY),
            base_url,
            excluded_tenant,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.excluded_tenant, DEFAULT_EXCLUDED_TENANT);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = load(&[(ENV_API_KEY, "   ")]).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            (ENV_API_KEY, "secret-key"),
            (ENV_BASE_URL, "https://helpdesk.example.com/api/"),
            (ENV_EXCLUDED_TENANT, "99"),
            (ENV_REQUEST_TIMEOUT, "15"),
        ])
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret-key"));
        assert_eq!(config.base_url, "https://helpdesk.example.com/api");
        assert_eq!(config.excluded_tenant, 99);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            load(&[(ENV_EXCLUDED_TENANT, "acme")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            load(&[(ENV_REQUEST_TIMEOUT, "0")]),
            Err(AppError::Configuration(_))
        ));
    }
}
