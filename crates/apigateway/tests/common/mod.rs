#![allow(dead_code)]

use apigateway::{handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use prometheus_client::registry::Registry;
use serde_json::Value;
use shared::{
    abstract_trait::DynSessionService,
    cache::MemoryStorage,
    config::SessionConfig,
    service::{CredentialChain, SessionService, SessionServiceDeps},
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct TestApp {
    pub router: Router,
    pub service: Arc<SessionService>,
}

fn deps() -> (SessionServiceDeps, Arc<Mutex<Registry>>, Arc<Mutex<Metrics>>) {
    let registry = Arc::new(Mutex::new(Registry::default()));
    let metrics = Arc::new(Mutex::new(Metrics::new()));

    let deps = SessionServiceDeps {
        storage: Arc::new(MemoryStorage::new()),
        verifier: Arc::new(CredentialChain::demo_accounts()),
        config: SessionConfig::immediate(),
        metrics: metrics.clone(),
        registry: registry.clone(),
    };

    (deps, registry, metrics)
}

fn app(
    service: Arc<SessionService>,
    registry: Arc<Mutex<Registry>>,
    metrics: Arc<Mutex<Metrics>>,
) -> TestApp {
    let dyn_service: DynSessionService = service.clone();
    let state = AppState::from_session_service(dyn_service, registry, metrics);

    TestApp {
        router: AppRouter::build(state),
        service,
    }
}

/// App whose session store has finished restoring.
pub async fn ready_app() -> TestApp {
    let (deps, registry, metrics) = deps();
    let service = Arc::new(SessionService::init(deps).await);
    app(service, registry, metrics)
}

/// App whose session store has not been restored yet, so it is still loading.
pub async fn loading_app() -> TestApp {
    let (deps, registry, metrics) = deps();
    let service = Arc::new(SessionService::new(deps).await);
    app(service, registry, metrics)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
