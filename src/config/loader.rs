//! Load AppConfig from environment variables. `.env` is loaded by the binary with dotenvy.

use crate::config::{AppConfig, DatabaseConfig, DatabaseTarget};
use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Read config from the process environment.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Read config through `lookup`. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let host = get("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
    let port = parse_or("APP_PORT", get("APP_PORT"), DEFAULT_PORT)?;

    let target = match get("DATABASE_URL") {
        Some(url) => DatabaseTarget::Url(url),
        None => DatabaseTarget::Parts {
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
            user: get("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: get("DB_NAME").unwrap_or_else(|| "movies".into()),
        },
    };
    let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }
    let skip = parse_bool("APP_SKIP_MIGRATIONS", get("APP_SKIP_MIGRATIONS"))?;

    Ok(AppConfig {
        host,
        port,
        database: DatabaseConfig {
            target,
            max_connections,
            migrate: !skip,
        },
    })
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => match v.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { key, value: v }),
        },
    }
}

fn parse_bool(key: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|s| s.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) if v == "true" || v == "1" => Ok(true),
        Some(v) if v == "false" || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::Invalid { key, value: v }),
    }
}
