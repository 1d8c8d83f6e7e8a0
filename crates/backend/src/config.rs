use anyhow::{Context, Result, anyhow};
use shared::config::DatabaseConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub db_max_conn: u32,
    pub port: u16,
    pub router: RouterConfig,
}

/// Route registration options. `prefix` is normalized to either `""` or
/// `/segment[/segment...]` without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub prefix: String,
    pub cors_enabled: bool,
}

impl RouterConfig {
    pub fn new(prefix: &str, cors_enabled: bool) -> Self {
        Self {
            prefix: normalize_prefix(prefix),
            cors_enabled,
        }
    }

    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_PREFIX, false)
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig::from_lookup(&lookup)?;

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => DEFAULT_DB_MAX_CONN,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let prefix = lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let cors_enabled = match lookup("CORS_ENABLED") {
            Some(raw) => parse_bool("CORS_ENABLED", &raw)?,
            None => false,
        };

        Ok(Self {
            database,
            db_max_conn,
            port,
            router: RouterConfig::new(&prefix, cors_enabled),
        })
    }
}
