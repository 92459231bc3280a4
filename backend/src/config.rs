//! Server configuration read from `PET_CARE_*` environment variables.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::DEFAULT_DUE_SOON_DAYS;

pub const BIND_ADDR_VAR: &str = "PET_CARE_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "PET_CARE_CORS_ORIGIN";
pub const USER_ID_VAR: &str = "PET_CARE_USER_ID";
pub const STATIC_DIR_VAR: &str = "PET_CARE_STATIC_DIR";
pub const DUE_SOON_DAYS_VAR: &str = "PET_CARE_DUE_SOON_DAYS";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Browser origin allowed by CORS
    pub cors_origin: String,
    /// The single user every request acts as
    pub current_user_id: i64,
    /// Built frontend served for non-API paths
    pub static_dir: Option<PathBuf>,
    pub due_soon_days: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_origin: "http://localhost:5173".to_string(),
            current_user_id: 1,
            static_dir: None,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing or blank values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_var(BIND_ADDR_VAR, get(BIND_ADDR_VAR), defaults.bind_addr)?,
            cors_origin: get(CORS_ORIGIN_VAR).unwrap_or(defaults.cors_origin),
            current_user_id: parse_var(USER_ID_VAR, get(USER_ID_VAR), defaults.current_user_id)?,
            static_dir: get(STATIC_DIR_VAR).map(PathBuf::from),
            due_soon_days: parse_var(
                DUE_SOON_DAYS_VAR,
                get(DUE_SOON_DAYS_VAR),
                defaults.due_soon_days,
            )?,
        })
    }
}

fn parse_var<T>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
