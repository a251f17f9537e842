use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::modules::email::adapter::outgoing::SENDGRID_API_URL;
use crate::modules::gateway::adapter::outgoing::DEFAULT_TIMEOUT;
use crate::modules::email::application::services::DEFAULT_QUEUE_CAPACITY;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// `None` disables outbound email
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_api_url: String,
    pub from_email: String,
    pub from_name: String,
}

/// Everything the server reads from the environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub hubhrms_url: String,
    pub hubhrms_api_key: Option<String>,
    pub hubhrms_timeout: Duration,
    pub request_timeout: Duration,
    pub storage_bucket: String,
    pub storage_public_base_url: String,
    pub email: EmailConfig,
    pub cors_allowed_origins: Vec<String>,
    pub notification_queue_capacity: usize,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let hubhrms_url = var("HUBHRMS_GRAPHQL_URL").ok_or(ConfigError::Missing("HUBHRMS_GRAPHQL_URL"))?;

        Ok(Self {
            host: or("HOST", "0.0.0.0"),
            port: parse(&var, "PORT", 8080)?,
            environment: or("RUST_ENV", "development"),
            hubhrms_url,
            hubhrms_api_key: var("HUBHRMS_API_KEY"),
            hubhrms_timeout: Duration::from_secs(parse(
                &var,
                "HUBHRMS_TIMEOUT_SECS",
                DEFAULT_TIMEOUT.as_secs(),
            )?),
            request_timeout: Duration::from_secs(parse(&var, "REQUEST_TIMEOUT_SECS", 60)?),
            storage_bucket: or("STORAGE_BUCKET", "hr-recruiting-resumes"),
            storage_public_base_url: or("STORAGE_PUBLIC_BASE_URL", "https://storage.googleapis.com"),
            email: EmailConfig {
                sendgrid_api_key: var("SENDGRID_API_KEY"),
                sendgrid_api_url: or("SENDGRID_API_URL", SENDGRID_API_URL),
                from_email: or("EMAIL_FROM", "noreply@company.com"),
                from_name: or("EMAIL_FROM_NAME", "HR Recruiting"),
            },
            cors_allowed_origins: or(
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:5173,http://localhost:3000",
            )
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect(),
            notification_queue_capacity: parse(
                &var,
                "NOTIFICATION_QUEUE_CAPACITY",
                DEFAULT_QUEUE_CAPACITY,
            )?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
    }
}
