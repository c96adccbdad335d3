//! Server configuration loaded from the environment

use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL URL; `None` runs on the in-process store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub admin_token: Option<String>,
    pub expose_error_details: bool,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build from any key lookup. `development` picks the debug-build defaults.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let run_migrations = match var("RUN_MIGRATIONS") {
            Some(raw) => parse_flag("RUN_MIGRATIONS", &raw)?,
            None => true,
        };

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let admin_token = var("ADMIN_TOKEN");
        if admin_token.is_none() && !development {
            anyhow::bail!("ADMIN_TOKEN must be set in production");
        }

        let expose_error_details = match var("EXPOSE_ERROR_DETAILS") {
            Some(raw) => parse_flag("EXPOSE_ERROR_DETAILS", &raw)?,
            None => development,
        };

        let log_json = var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            database_url: var("DATABASE_URL"),
            database_max_connections,
            run_migrations,
            bind_addr,
            frontend_origins,
            admin_token,
            expose_error_details,
            log_json,
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{key} must be a boolean, got {raw}"),
    }
}
