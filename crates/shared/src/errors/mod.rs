mod error;
mod http;
mod service;
mod storage;

pub use self::error::ErrorResponse;
pub use self::http::{HttpError, INVALID_CREDENTIALS_MESSAGE};
pub use self::service::ServiceError;
pub use self::storage::StorageError;
