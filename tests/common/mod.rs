#![allow(dead_code)]

use std::sync::Arc;

use message_api::config::Limits;
use message_api::models::Message;
use message_api::openapi::openapi_document;
use message_api::routes::configure_routes;
use message_api::service::MessageService;
use message_api::store::{JsonFileStore, MessageStore};
use tempfile::TempDir;
use warp::{Filter, Reply};

/// API key used by every test server
pub const API_KEY: &str = "test-secret";

/// A message service backed by a JSON document in a temporary directory
pub struct TestApp {
    pub dir: TempDir,
    pub store: Arc<JsonFileStore>,
    pub service: Arc<MessageService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = Arc::new(JsonFileStore::new(dir.path().join("messages.json")));
        let service = Arc::new(MessageService::new(store.clone(), limits));
        Self {
            dir,
            store,
            service,
        }
    }

    pub async fn seed(&self, count: usize) -> Vec<Message> {
        let messages: Vec<Message> = (0..count)
            .map(|i| Message::new(format!("sender-{i}"), format!("body-{i}")))
            .collect();
        self.store
            .save(&messages)
            .await
            .expect("Failed to seed store");
        messages
    }

    pub async fn stored(&self) -> Vec<Message> {
        self.store.load().await.expect("Failed to load store")
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone + 'static
    {
        configure_routes(
            self.service.clone(),
            Arc::from(API_KEY),
            Arc::new(openapi_document(None)),
        )
    }
}
