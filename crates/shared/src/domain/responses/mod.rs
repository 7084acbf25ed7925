mod api;
mod session;

pub use self::api::ApiResponse;
pub use self::session::SessionResponse;
