mod session;

pub use self::session::{LOGIN_PATH, Role, SESSION_KEY, Session, SessionSnapshot, SessionUpdate};
