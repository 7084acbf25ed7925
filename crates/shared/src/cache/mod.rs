mod file;
mod memory;
mod redis;

pub use self::file::FileStorage;
pub use self::memory::MemoryStorage;
pub use self::redis::RedisStorage;
