//! Shared test harness for E2E integration tests.
//!
//! Connects an `IntentManager` and `ChatSession` to one shared
//! `MockBackend`, exercising real code paths across all crate boundaries.

use std::sync::Arc;

use ic_agent_client::{ChatSession, IntentManager, MockBackend};

pub const PROJECT_ID: &str = "demo-agent";
pub const LANGUAGE_CODE: &str = "de";

/// E2E harness: manager + sessions over one shared mock backend.
pub struct TestHarness {
    pub backend: Arc<MockBackend>,
    pub manager: IntentManager<Arc<MockBackend>>,
}

impl TestHarness {
    /// Connect to a fresh, empty mock agent.
    pub async fn connect() -> Self {
        init_tracing();
        let backend = Arc::new(MockBackend::new(PROJECT_ID));
        let manager = IntentManager::connect(backend.clone(), PROJECT_ID, LANGUAGE_CODE)
            .await
            .expect("connect to mock backend");
        Self { backend, manager }
    }

    /// Open a fresh chat session against the same backend.
    pub fn session(&self) -> ChatSession<Arc<MockBackend>> {
        ChatSession::new(self.backend.clone(), PROJECT_ID, LANGUAGE_CODE)
    }
}

/// Install a test subscriber once per process. Logging setup is the test
/// binary's job, not the libraries'.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
