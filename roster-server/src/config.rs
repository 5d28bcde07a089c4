use std::env;

use anyhow::Context as _;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process configuration read from the environment (and `.env`, if present).
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub auto_run_migrations: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());

        Ok(Self {
            database_url,
            bind_addr,
            max_connections: env_u32("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            auto_run_migrations: env_bool("AUTO_RUN_MIGRATIONS", true),
        })
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |value| parse_bool(&value))
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key).map_or(default, |value| parse_u32_or(&value, default))
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_u32_or(value: &str, default: u32) -> u32 {
    value.trim().parse::<u32>().unwrap_or(default)
}
