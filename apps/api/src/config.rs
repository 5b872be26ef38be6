use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a present but unparseable value is a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `p<id>.json` candidate records.
    pub records_dir: PathBuf,
    pub read_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            records_dir: PathBuf::from("db"),
            read_timeout: Duration::from_millis(2000),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            records_dir: std::env::var("RECORDS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.records_dir),
            read_timeout: Duration::from_millis(env_or(
                "RECORD_READ_TIMEOUT_MS",
                defaults.read_timeout.as_millis() as u64,
            )?),
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
