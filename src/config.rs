use std::{env, path::PathBuf, time::Duration};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;
const RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";
const PROMO_FILE: &str = "promocodes.csv";
const HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Razorpay API credentials and endpoint.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    pub api_base: String,
}

/// Settings read once at startup and handed to the services that need them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub razorpay: RazorpayConfig,
    /// External promo validation endpoint. When unset the local CSV catalog answers lookups.
    pub promo_service_url: Option<String>,
    pub promo_file: PathBuf,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let key_id = get("RAZORPAY_KEY_ID").ok_or(ConfigError::Missing("RAZORPAY_KEY_ID"))?;
        let key_secret =
            get("RAZORPAY_KEY_SECRET").ok_or(ConfigError::Missing("RAZORPAY_KEY_SECRET"))?;

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => PORT,
        };

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "HTTP_TIMEOUT_SECS",
                value,
            })?,
            None => HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            razorpay: RazorpayConfig {
                key_id,
                key_secret,
                api_base: get("RAZORPAY_API_BASE")
                    .unwrap_or_else(|| RAZORPAY_API_BASE.to_string()),
            },
            promo_service_url: get("PROMO_SERVICE_URL"),
            promo_file: PathBuf::from(get("PROMO_FILE").unwrap_or_else(|| PROMO_FILE.to_string())),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
