/// Configuration management
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service configuration, read from `APP_*`, `HTTP_*`, `LOG_FORMAT` and
/// `JSON_PAYLOAD_LIMIT_BYTES`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_app_host")]
    pub app_host: String,
    #[serde(default = "default_app_port")]
    pub app_port: u16,
    /// Worker threads; actix picks one per physical core when unset
    #[serde(default)]
    pub http_workers: Option<usize>,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "default_json_payload_limit_bytes")]
    pub json_payload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::validated(envy::from_env()?)
    }

    /// Build from explicit key/value pairs instead of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::validated(envy::from_iter(vars)?)
    }

    fn validated(config: Self) -> Result<Self, ConfigError> {
        if config.http_workers == Some(0) {
            return Err(ConfigError::Invalid {
                var: "HTTP_WORKERS",
                value: "0".to_string(),
            });
        }

        if config.json_payload_limit_bytes == 0 {
            return Err(ConfigError::Invalid {
                var: "JSON_PAYLOAD_LIMIT_BYTES",
                value: "0".to_string(),
            });
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_port() -> u16 {
    8001
}

fn default_json_payload_limit_bytes() -> usize {
    16 * 1024
}
