use crate::{
    abstract_trait::{CredentialVerifierTrait, DynCredentialVerifier},
    model::{Role, Session},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

const DEMO_INSTITUTION: &str = "University of Lagos";

/// A single hard-coded account.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    email: String,
    password: String,
    profile: Session,
}

impl StaticCredential {
    pub fn new(email: impl Into<String>, password: impl Into<String>, profile: Session) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            profile,
        }
    }

    /// The standard member demo account, also used by the one-click demo login.
    pub fn member() -> Self {
        Self::new(
            "demo@gradlink.ng",
            "password123",
            profile(
                "demo-user",
                "Demo User",
                "demo@gradlink.ng",
                Some(DEMO_INSTITUTION),
                Role::User,
                true,
                75,
            ),
        )
    }

    pub fn admin() -> Self {
        Self::new(
            "admin@gradlink.ng",
            "admin123",
            profile(
                "admin-user",
                "Admin User",
                "admin@gradlink.ng",
                None,
                Role::Admin,
                false,
                100,
            ),
        )
    }

    pub fn institution() -> Self {
        Self::new(
            "institution@gradlink.ng",
            "inst123",
            profile(
                "inst-user",
                DEMO_INSTITUTION,
                "institution@gradlink.ng",
                Some(DEMO_INSTITUTION),
                Role::Institution,
                false,
                90,
            ),
        )
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// A fresh session for this account, seen now.
    pub fn session(&self) -> Session {
        let mut session = self.profile.clone();
        session.last_seen = Utc::now();
        session
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && email == self.email && password == self.password
    }
}

fn profile(
    id: &str,
    name: &str,
    email: &str,
    institution: Option<&str>,
    role: Role,
    is_demo: bool,
    profile_completion: u8,
) -> Session {
    Session {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        institution: institution.map(str::to_string),
        profile_picture: None,
        role,
        is_demo,
        profile_completion,
        is_online: true,
        last_seen: Utc::now(),
    }
}

#[async_trait]
impl CredentialVerifierTrait for StaticCredential {
    async fn verify(&self, email: &str, password: &str) -> Option<Session> {
        if self.matches(email, password) {
            debug!("Credential accepted for {email}");
            Some(self.session())
        } else {
            None
        }
    }
}

/// Tries each verifier in order; the first acceptance wins.
#[derive(Clone, Default)]
pub struct CredentialChain {
    verifiers: Vec<DynCredentialVerifier>,
}

impl CredentialChain {
    pub fn new(verifiers: Vec<DynCredentialVerifier>) -> Self {
        Self { verifiers }
    }

    /// Member, administrator and institution demo accounts.
    pub fn demo_accounts() -> Self {
        Self::new(vec![
            Arc::new(StaticCredential::member()),
            Arc::new(StaticCredential::admin()),
            Arc::new(StaticCredential::institution()),
        ])
    }

    pub fn with(mut self, verifier: DynCredentialVerifier) -> Self {
        self.verifiers.push(verifier);
        self
    }
}

#[async_trait]
impl CredentialVerifierTrait for CredentialChain {
    async fn verify(&self, email: &str, password: &str) -> Option<Session> {
        for verifier in &self.verifiers {
            if let Some(session) = verifier.verify(email, password).await {
                return Some(session);
            }
        }
        None
    }
}
