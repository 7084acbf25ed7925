use crate::{
    abstract_trait::{DynCredentialVerifier, DynSessionService, DynSessionStorage},
    cache::{FileStorage, MemoryStorage, RedisStorage},
    config::{Config, RedisClient, StorageBackend},
    service::{CredentialChain, SessionService, SessionServiceDeps},
    utils::Metrics,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct DependenciesInject {
    pub session_service: DynSessionService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("session_service", &"DynSessionService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(
        config: &Config,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Result<Self> {
        let storage = Self::storage(config)
            .await
            .context("Failed to initialize session storage")?;

        let verifier: DynCredentialVerifier = Arc::new(CredentialChain::demo_accounts());

        let session_service: DynSessionService = Arc::new(
            SessionService::init(SessionServiceDeps {
                storage,
                verifier,
                config: config.session.clone(),
                metrics,
                registry,
            })
            .await,
        );

        Ok(Self { session_service })
    }

    async fn storage(config: &Config) -> Result<DynSessionStorage> {
        let storage: DynSessionStorage = match config.storage {
            StorageBackend::Memory => {
                info!("Using in-memory session storage");
                Arc::new(MemoryStorage::new())
            }
            StorageBackend::File => {
                info!(
                    "Using file session storage at {}",
                    config.storage_dir.display()
                );
                Arc::new(FileStorage::new(config.storage_dir.clone()))
            }
            StorageBackend::Redis => {
                info!("Using redis session storage");
                let redis = RedisClient::new(&config.redis)?;
                redis
                    .ping()
                    .await
                    .context("Failed to ping Redis server")?;
                Arc::new(RedisStorage::new(redis.pool))
            }
        };

        Ok(storage)
    }
}
