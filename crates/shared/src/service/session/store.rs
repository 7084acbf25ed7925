use crate::{
    abstract_trait::{DynCredentialVerifier, DynSessionStorage, SessionServiceTrait},
    config::SessionConfig,
    domain::requests::RegisterRequest,
    errors::StorageError,
    model::{Role, SESSION_KEY, Session, SessionSnapshot, SessionUpdate},
    service::session::credential::StaticCredential,
    utils::{Metrics, Operation, Status},
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::{
    sync::{Mutex, watch},
    time::Instant,
};
use tracing::{error, info, warn};
use uuid::Uuid;

const REGISTERED_PROFILE_COMPLETION: u8 = 60;

pub struct SessionServiceDeps {
    pub storage: DynSessionStorage,
    pub verifier: DynCredentialVerifier,
    pub config: SessionConfig,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

/// Owner of the signed-in user. Memory is the authority; storage is a mirror
/// that is rewritten after every change.
pub struct SessionService {
    storage: DynSessionStorage,
    verifier: DynCredentialVerifier,
    config: SessionConfig,
    metrics: Arc<Mutex<Metrics>>,
    state: watch::Sender<SessionSnapshot>,
    // held across the memory change and its storage write
    writes: Mutex<()>,
    restored: AtomicBool,
}

/// Keeps the loading flag raised while alive.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SessionSnapshot>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a watch::Sender<SessionSnapshot>) -> Self {
        state.send_modify(SessionSnapshot::begin);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(SessionSnapshot::finish);
    }
}

impl SessionService {
    /// Builds the service in the loading state; call [`SessionService::restore`]
    /// to rehydrate and clear it.
    pub async fn new(deps: SessionServiceDeps) -> Self {
        let SessionServiceDeps {
            storage,
            verifier,
            config,
            metrics,
            registry,
        } = deps;

        metrics
            .lock()
            .await
            .register("session_service", &mut *registry.lock().await);

        let (state, _) = watch::channel(SessionSnapshot::restoring());

        Self {
            storage,
            verifier,
            config,
            metrics,
            state,
            writes: Mutex::new(()),
            restored: AtomicBool::new(false),
        }
    }

    /// [`SessionService::new`] followed by [`SessionService::restore`].
    pub async fn init(deps: SessionServiceDeps) -> Self {
        let service = Self::new(deps).await;
        service.restore().await;
        service
    }

    /// Loads the stored record, if any, into memory.
    pub async fn restore(&self) {
        let start = Instant::now();
        info!("🔄 Restoring session from storage");

        let write = self.writes.lock().await;
        let restored = match self.storage.get(SESSION_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw)
                .map_err(StorageError::from)
            {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Discarding unreadable stored session: {e}");
                    if let Err(e) = self.storage.remove(SESSION_KEY).await {
                        error!("Failed to remove unreadable session: {e}");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read stored session: {e}");
                None
            }
        };

        let first = !self.restored.swap(true, Ordering::SeqCst);
        let found = restored.is_some();

        self.state.send_modify(|snapshot| {
            snapshot.user = restored;
            if first {
                snapshot.finish();
            }
        });
        drop(write);

        let message = if found {
            "Session restored"
        } else {
            "No stored session"
        };
        self.complete(Operation::Restore, start, true, message).await;
    }

    /// Callers hold `writes`.
    async fn persist(&self, session: &Session) {
        let written = match serde_json::to_string(session) {
            Ok(json) => self.storage.set(SESSION_KEY, &json).await,
            Err(e) => Err(StorageError::from(e)),
        };

        if let Err(e) = written {
            error!("Failed to persist session for {}: {e}", session.email);
        }
    }

    async fn start(&self, session: Session) {
        let _write = self.writes.lock().await;
        self.state
            .send_modify(|snapshot| snapshot.user = Some(session.clone()));
        self.persist(&session).await;
    }

    async fn complete(&self, operation: Operation, start: Instant, is_success: bool, message: &str) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics
            .lock()
            .await
            .record(operation, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    async fn login(&self, email: &str, password: &str) -> bool {
        self.sign_in(email, password).await.is_some()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Option<Session> {
        let start = Instant::now();
        info!("🔐 Attempting login for email: {email}");

        let _loading = LoadingGuard::begin(&self.state);
        tokio::time::sleep(self.config.login_delay).await;

        match self.verifier.verify(email, password).await {
            Some(session) => {
                self.start(session.clone()).await;
                self.complete(
                    Operation::Login,
                    start,
                    true,
                    &format!("Login successful as {}", session.role),
                )
                .await;
                Some(session)
            }
            None => {
                self.complete(Operation::Login, start, false, "Invalid credentials")
                    .await;
                None
            }
        }
    }

    async fn login_demo(&self) -> Session {
        let start = Instant::now();
        info!("🎭 Starting demo session");

        let session = StaticCredential::member().session();
        self.start(session.clone()).await;

        self.complete(Operation::LoginDemo, start, true, "Demo session started")
            .await;
        session
    }

    async fn register(&self, request: &RegisterRequest) -> bool {
        self.sign_up(request).await;
        true
    }

    async fn sign_up(&self, request: &RegisterRequest) -> Session {
        let start = Instant::now();
        info!(
            "📝 [REGISTER] Starting user registration | Email: {}",
            request.email
        );

        let _loading = LoadingGuard::begin(&self.state);
        tokio::time::sleep(self.config.register_delay).await;

        let session = Session {
            id: Uuid::new_v4().to_string(),
            name: request.full_name.clone(),
            email: request.email.clone(),
            institution: Some(request.institution.clone()).filter(|i| !i.is_empty()),
            profile_picture: request.profile_picture.clone(),
            role: Role::User,
            is_demo: false,
            profile_completion: REGISTERED_PROFILE_COMPLETION,
            is_online: true,
            last_seen: Utc::now(),
        };

        self.start(session.clone()).await;

        self.complete(
            Operation::Register,
            start,
            true,
            "User registered successfully",
        )
        .await;
        session
    }

    async fn logout(&self) {
        let start = Instant::now();

        let write = self.writes.lock().await;
        let mut previous = None;
        self.state
            .send_modify(|snapshot| previous = snapshot.user.take());
        if let Err(e) = self.storage.remove(SESSION_KEY).await {
            error!("Failed to clear stored session: {e}");
        }
        drop(write);

        let message = match previous {
            Some(user) => format!("Signed out {}", user.email),
            None => "No active session".to_string(),
        };
        self.complete(Operation::Logout, start, true, &message).await;
    }

    async fn update_user(&self, update: SessionUpdate) -> Option<Session> {
        let start = Instant::now();

        let write = self.writes.lock().await;
        let mut merged = None;
        self.state.send_if_modified(|snapshot| match snapshot.user.as_mut() {
            Some(user) => {
                user.merge(update);
                merged = Some(user.clone());
                true
            }
            None => false,
        });

        match &merged {
            Some(user) => {
                self.persist(user).await;
                drop(write);
                self.complete(Operation::UpdateUser, start, true, "Profile updated")
                    .await;
            }
            None => {
                warn!("Ignoring profile update without an active session");
            }
        }

        merged
    }

    fn current_user(&self) -> Option<Session> {
        self.state.borrow().user.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }
}
