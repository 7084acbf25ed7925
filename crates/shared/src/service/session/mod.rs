mod credential;
mod store;

pub use self::credential::{CredentialChain, StaticCredential};
pub use self::store::{SessionService, SessionServiceDeps};
