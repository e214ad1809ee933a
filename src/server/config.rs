use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Which `MailService` implementation handles notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailServiceKind {
    /// Logs mail locally using the configured addresses.
    #[default]
    Local,
    /// Logs a simulated cloud send using fixed addresses.
    Cloud,
}

impl FromStr for MailServiceKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "cloud" => Ok(Self::Cloud),
            _ => Err(()),
        }
    }
}

/// Process-wide settings, read once at startup and passed to components explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub mail_to_address: String,
    pub mail_from_address: String,
    pub mail_service: MailServiceKind,

    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Required keys are `DATABASE_URL`, `MAIL_TO_ADDRESS` and `MAIL_FROM_ADDRESS`. Optional
    /// keys fall back to their defaults when unset, but a value that is set and cannot be
    /// parsed is an error rather than silently ignored.
    pub fn from_source<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let bind_address = match var("BIND_ADDRESS") {
            Some(value) => parse_value("BIND_ADDRESS", value)?,
            None => parse_value("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
        };

        let mail_service = match var("MAIL_SERVICE") {
            Some(value) => parse_value("MAIL_SERVICE", value)?,
            None => MailServiceKind::default(),
        };

        let seed_demo_data = match var("SEED_DEMO_DATA") {
            Some(value) => parse_bool("SEED_DEMO_DATA", value)?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            mail_to_address: required("MAIL_TO_ADDRESS")?,
            mail_from_address: required("MAIL_FROM_ADDRESS")?,
            mail_service,
            seed_demo_data,
        })
    }
}

fn parse_value<T: FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    })
}

fn parse_bool(key: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
