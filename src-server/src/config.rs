use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ROOT: &str = ".";

pub struct Config {
    pub port: u16,
    pub root: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "ASSET_PORT", &DEFAULT_PORT.to_string())?,
            root: try_load(&lookup, "ASSET_ROOT", DEFAULT_ROOT)?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
