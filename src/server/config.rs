use std::time::Duration;

use dioxus_logger::tracing::Level;

use crate::server::{
    error::{config::ConfigError, AppError},
    store::codec::MAX_MESSAGE_LENGTH,
};

const DEFAULT_SCAN_LIMIT: u8 = 100;
const DEFAULT_WRITE_DELAY_MS: u64 = 1_000;
const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_INLINE_LIMIT: usize = 1_500;

/// Largest page Discord returns from the channel history endpoint.
const MAX_SCAN_LIMIT: u8 = 100;


pub struct Config {
    pub discord_bot_token: String,

    pub database_channel_id: u64,

    pub scan_limit: u8,
    pub write_delay: Duration,
    pub operation_timeout: Duration,
    pub inline_limit: usize,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable failed to parse or is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_channel_id = required("DATABASE_CHANNEL_ID")?;
        let database_channel_id = parse_var("DATABASE_CHANNEL_ID", &database_channel_id)?;
        if database_channel_id == 0 {
            return Err(invalid(
                "DATABASE_CHANNEL_ID",
                "0",
                "channel ID must be non-zero",
            ));
        }

        let scan_limit = optional_var(&lookup, "STORE_SCAN_LIMIT", DEFAULT_SCAN_LIMIT)?;
        if scan_limit == 0 || scan_limit > MAX_SCAN_LIMIT {
            return Err(invalid(
                "STORE_SCAN_LIMIT",
                &scan_limit.to_string(),
                "must be between 1 and 100",
            ));
        }

        let inline_limit = optional_var(&lookup, "STORE_INLINE_LIMIT", DEFAULT_INLINE_LIMIT)?;
        if inline_limit >= MAX_MESSAGE_LENGTH {
            return Err(invalid(
                "STORE_INLINE_LIMIT",
                &inline_limit.to_string(),
                "must be below Discord's 2000 character message limit",
            ));
        }

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| invalid("LOG_LEVEL", &value, &e.to_string()))?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_channel_id,
            scan_limit,
            write_delay: Duration::from_millis(optional_var(
                &lookup,
                "STORE_WRITE_DELAY_MS",
                DEFAULT_WRITE_DELAY_MS,
            )?),
            operation_timeout: Duration::from_millis(optional_var(
                &lookup,
                "STORE_OPERATION_TIMEOUT_MS",
                DEFAULT_OPERATION_TIMEOUT_MS,
            )?),
            inline_limit,
            log_level,
        })
    }
}

fn optional_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => parse_var(name, &value),
        None => Ok(default),
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| invalid(name, value, &e.to_string()))
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
