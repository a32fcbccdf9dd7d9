/*
 * Responsibility
 * - Environment/config loading (JWKS_URL, REQUIRED_SCOPE, APP_TIMEZONE, ...)
 * - Config validation (missing or unparsable values fail startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub jwks_url: Url,
    pub required_scope: String,
    pub timezone: Tz,
    pub jwks_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let jwks_url = std::env::var("JWKS_URL").map_err(|_| ConfigError::Missing("JWKS_URL"))?;
        let jwks_url = Url::parse(&jwks_url).map_err(|_| ConfigError::Invalid("JWKS_URL"))?;

        let required_scope =
            std::env::var("REQUIRED_SCOPE").map_err(|_| ConfigError::Missing("REQUIRED_SCOPE"))?;
        if required_scope.trim().is_empty() {
            return Err(ConfigError::Invalid("REQUIRED_SCOPE"));
        }

        // IANA zone id, e.g. "Asia/Kolkata". Token expiries and "now" are both
        // evaluated in this zone.
        let timezone = std::env::var("APP_TIMEZONE")
            .map_err(|_| ConfigError::Missing("APP_TIMEZONE"))?
            .parse::<Tz>()
            .map_err(|_| ConfigError::Invalid("APP_TIMEZONE"))?;

        let jwks_timeout = std::env::var("JWKS_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            jwks_url,
            required_scope,
            timezone,
            jwks_timeout,
        })
    }
}
