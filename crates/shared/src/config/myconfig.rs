use crate::config::redis::RedisConfig;
use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, str::FromStr, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(anyhow!(
                "SESSION_STORAGE must be 'memory', 'file' or 'redis', got '{}'",
                other
            )),
        }
    }
}

/// Artificial latency standing in for the network round trip.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub login_delay: Duration,
    pub register_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            register_delay: Duration::from_millis(2000),
        }
    }
}

impl SessionConfig {
    /// No delays, for tests and scripted clients.
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageBackend,
    pub storage_dir: PathBuf,
    pub redis: RedisConfig,
    pub session: SessionConfig,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env_or(key, default)
        .parse::<T>()
        .with_context(|| format!("{key} has an invalid value"))
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = parse_env::<u16>("PORT", "5000")?;

        let storage = env_or("SESSION_STORAGE", "memory")
            .parse::<StorageBackend>()
            .context("Invalid SESSION_STORAGE")?;

        let storage_dir = PathBuf::from(env_or("SESSION_STORAGE_DIR", "./data"));

        let redis = RedisConfig::new(
            env_or("REDIS_HOST", "localhost"),
            parse_env::<u16>("REDIS_PORT", "6379")?,
            parse_env::<u8>("REDIS_DB", "0")?,
            std::env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()),
        );

        let session = SessionConfig {
            login_delay: Duration::from_millis(parse_env::<u64>("LOGIN_DELAY_MS", "1000")?),
            register_delay: Duration::from_millis(parse_env::<u64>("REGISTER_DELAY_MS", "2000")?),
        };

        Ok(Self {
            port,
            storage,
            storage_dir,
            redis,
            session,
        })
    }
}
