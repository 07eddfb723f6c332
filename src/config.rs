//! Application Configuration
//!
//! Values are baked in at build time from environment variables.

use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Origin (and optional prefix) the tag paths are joined to
    pub api_base_url: String,
    /// localStorage key holding the bearer token
    pub token_storage_key: String,
    /// Fixed token for local development; bypasses localStorage when set
    pub dev_token: Option<String>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            dev_token: None,
            log_level: Level::INFO,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// `TAG_ADMIN_API_URL`, `TAG_ADMIN_TOKEN_KEY`, `TAG_ADMIN_DEV_TOKEN`, `TAG_ADMIN_LOG`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TAG_ADMIN_API_URL"),
            option_env!("TAG_ADMIN_TOKEN_KEY"),
            option_env!("TAG_ADMIN_DEV_TOKEN"),
            option_env!("TAG_ADMIN_LOG"),
        )
    }

    pub fn from_values(
        api_base_url: Option<&str>,
        token_storage_key: Option<&str>,
        dev_token: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_blank(api_base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            token_storage_key: non_blank(token_storage_key)
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            dev_token: non_blank(dev_token).map(str::to_string),
            log_level: non_blank(log_level)
                .and_then(|level| Level::from_str(level).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
