//! REST API test harness.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use roster_persistence::backends::memory::MemoryBackend;
use roster_persistence::types::Coworker;
use roster_rest::{AppState, ServerConfig};
use serde_json::Value;

/// Test harness for REST API testing.
///
/// Holds the test server and a handle to the backend so tests can check
/// what was (or was not) persisted.
pub struct RosterTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<MemoryBackend>,
}

impl RosterTestHarness {
    /// Creates a harness over an empty in-memory backend.
    pub fn new() -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::new(Arc::clone(&backend), ServerConfig::for_testing());
        let app = roster_rest::routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Posts `payload` to `/coworkers`.
    pub async fn create(&self, payload: &Value) -> TestResponse {
        self.server.post("/coworkers").json(payload).await
    }

    /// Creates a coworker and returns the stored record, asserting success.
    pub async fn seed(&self, payload: &Value) -> Coworker {
        let response = self.create(payload).await;
        response.assert_status_ok();
        response.json::<Coworker>()
    }

    /// Lists coworkers with the given query parameters.
    pub async fn list(&self, params: &[(&str, &str)]) -> TestResponse {
        let mut request = self.server.get("/coworkers");
        for (name, value) in params {
            request = request.add_query_param(name, value);
        }
        request.await
    }

    /// Lists coworkers and returns their names in response order.
    pub async fn list_names(&self, params: &[(&str, &str)]) -> Vec<String> {
        let response = self.list(params).await;
        response.assert_status_ok();
        response
            .json::<Vec<Coworker>>()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }
}
