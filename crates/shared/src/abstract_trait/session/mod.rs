use crate::{
    domain::requests::RegisterRequest,
    model::{Session, SessionSnapshot, SessionUpdate},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

pub type DynSessionService = Arc<dyn SessionServiceTrait + Send + Sync>;

#[async_trait]
pub trait SessionServiceTrait {
    async fn login(&self, email: &str, password: &str) -> bool;
    /// Same as `login`, but hands back the session it started.
    async fn sign_in(&self, email: &str, password: &str) -> Option<Session>;
    async fn login_demo(&self) -> Session;
    async fn register(&self, request: &RegisterRequest) -> bool;
    /// Same as `register`, but hands back the session it started.
    async fn sign_up(&self, request: &RegisterRequest) -> Session;
    async fn logout(&self);
    async fn update_user(&self, update: SessionUpdate) -> Option<Session>;
    fn current_user(&self) -> Option<Session>;
    fn is_loading(&self) -> bool;
    fn subscribe(&self) -> watch::Receiver<SessionSnapshot>;
}
