mod session;

pub use self::session::{CredentialChain, SessionService, SessionServiceDeps, StaticCredential};
