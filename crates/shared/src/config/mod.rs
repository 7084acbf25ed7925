mod myconfig;
mod redis;

pub use self::myconfig::{Config, SessionConfig, StorageBackend};
pub use self::redis::{RedisClient, RedisConfig};
