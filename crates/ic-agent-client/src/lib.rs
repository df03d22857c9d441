//! Client layer for the agent-management API.
//!
//! Provides the `AgentBackend` seam (HTTP adapter + in-memory mock), the
//! `IntentManager` with create-or-update CRUD over intents and entity
//! types, and `ChatSession` for detect-intent round trips. Training phrases
//! run through `ic-annotate` on their way into create/update requests.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod intents;
pub mod mock;
pub mod session;

// Re-export key types for convenience
pub use backend::AgentBackend;
pub use config::{ClientConfig, Credentials, CREDENTIALS_ENV};
pub use error::{ClientError, ClientResult};
pub use http::HttpBackend;
pub use intents::{IntentManager, IntentSpec};
pub use mock::MockBackend;
pub use session::ChatSession;
