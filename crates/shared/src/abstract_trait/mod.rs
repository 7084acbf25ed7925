mod credential;
mod session;
mod storage;

pub use self::credential::{CredentialVerifierTrait, DynCredentialVerifier};
pub use self::session::{DynSessionService, SessionServiceTrait};
pub use self::storage::{DynSessionStorage, SessionStorageTrait};
