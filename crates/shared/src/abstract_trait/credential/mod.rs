use crate::model::Session;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCredentialVerifier = Arc<dyn CredentialVerifierTrait + Send + Sync>;

#[async_trait]
pub trait CredentialVerifierTrait {
    /// Returns the session to start when the pair is accepted.
    async fn verify(&self, email: &str, password: &str) -> Option<Session>;
}
