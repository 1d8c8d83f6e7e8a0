use anyhow::{Context, Result};
use sqlx::{
    Connection, Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use tracing::{error, info};

pub type ConnectionPool = Pool<Postgres>;

const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

// password stays out of logs
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let host = required("DB_HOST")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let name = required("DB_NAME")?;

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("DB_PORT must be a valid u16 integer")?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host,
            port,
            user,
            password,
            name,
        })
    }

    /// TLS is disabled towards the database, matching every deployment of this backend.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    /// Opens the pool and pings one connection so an unreachable database fails startup.
    pub async fn new_pool(config: &DatabaseConfig, max_conn: u32) -> Result<ConnectionPool> {
        info!(
            "🔌 Connecting to database {} at {}:{}",
            config.name, config.host, config.port
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_conn)
            .connect_with(config.connect_options())
            .await
            .map_err(|err| {
                error!("❌ Failed to create database connection pool: {err}");
                anyhow::anyhow!("Failed to create database connection pool: {}", err)
            })?;

        let mut conn = pool
            .acquire()
            .await
            .context("Failed to acquire connection for ping")?;

        conn.ping().await.map_err(|err| {
            error!("❌ Cannot connect to DB: {err}");
            anyhow::anyhow!("Cannot connect to DB: {}", err)
        })?;

        info!("✅ Database reachable");

        Ok(pool)
    }
}
