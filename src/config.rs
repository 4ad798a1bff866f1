use std::{env, fmt::Display, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// Full connection string; wins over the discrete parameters when set.
    pub dsn_override: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    fn from_env() -> Self {
        Self {
            host: try_load("DB_HOST", "localhost"),
            port: try_load("DB_PORT", "5432"),
            user: try_load("DB_USER", "demo_user"),
            password: try_load("DB_PASSWORD", "demo_password"),
            dbname: try_load("DB_NAME", "demo_notes"),
            dsn_override: env::var("PG_DSN").ok(),
        }
    }

    /// Key-value DSN in the form accepted by tokio-postgres.
    pub fn dsn(&self) -> String {
        if let Some(dsn) = &self.dsn_override {
            return dsn.clone();
        }

        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            tracing::info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            tracing::warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
