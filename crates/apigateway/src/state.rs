use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynSessionService, config::Config, di::DependenciesInject, utils::Metrics,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));

        info!("Initializing session store");
        let di_container = DependenciesInject::new(config, metrics.clone(), registry.clone())
            .await
            .context("Failed to initialized depencency injection container")?;

        Ok(Self {
            di_container,
            registry,
            metrics,
        })
    }

    /// Wraps an already built session service.
    pub fn from_session_service(
        session_service: DynSessionService,
        registry: Arc<Mutex<Registry>>,
        metrics: Arc<Mutex<Metrics>>,
    ) -> Self {
        Self {
            di_container: DependenciesInject { session_service },
            registry,
            metrics,
        }
    }
}
