mod auth;

pub use self::auth::{AuthRequest, RegisterRequest};
