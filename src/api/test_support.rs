//! Helpers shared by handler tests: an in-process app and a fake database handle.
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    app::build_router,
    config::Config,
    db::{
        DatabaseSlot,
        probe::{DatabaseProbe, DbError, DbResult},
    },
    models::{self, ModelCatalog},
    state::{AppState, EnvPresence},
};

pub struct FakeDb {
    collections: Vec<String>,
    error: Option<String>,
    closed: bool,
}

impl FakeDb {
    pub fn with_collections(collections: Vec<String>) -> Self {
        Self {
            collections,
            error: None,
            closed: false,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            collections: Vec::new(),
            error: Some(message.to_string()),
            closed: false,
        }
    }

    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::with_collections(Vec::new())
        }
    }
}

#[async_trait]
impl DatabaseProbe for FakeDb {
    fn name(&self) -> Option<String> {
        Some("fake".to_string())
    }

    fn is_initialized(&self) -> bool {
        !self.closed
    }

    // Ignores `limit` so callers' own capping is exercised.
    async fn list_collections(&self, _limit: usize) -> DbResult<Vec<String>> {
        match &self.error {
            Some(message) => Err(DbError::Backend(message.clone())),
            None => Ok(self.collections.clone()),
        }
    }

    async fn close(&self) {}
}

fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("empty config is valid")
}

pub fn build(db: DatabaseSlot, models: ModelCatalog, env: EnvPresence) -> Router {
    build_router(AppState::new(db, models, env), &test_config())
}

pub fn test_app(db: DatabaseSlot) -> Router {
    build(db, models::catalog(), EnvPresence::default())
}

pub fn test_app_with_env(db: DatabaseSlot, env: EnvPresence) -> Router {
    build(db, models::catalog(), env)
}

pub fn test_app_with_models(db: DatabaseSlot, models: ModelCatalog) -> Router {
    build(db, models, EnvPresence::default())
}

pub async fn send(app: Router, request: Request<Body>) -> axum::response::Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = send(app, request).await;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).expect("response body is json");

    (status, body)
}
