//! Live chat session for sending test utterances against the agent.

use uuid::Uuid;

use ic_protocol::{paths, DetectIntentResponse, QueryInput};

use crate::backend::AgentBackend;
use crate::error::ClientResult;

/// One conversational session against the deployed agent.
pub struct ChatSession<B: AgentBackend> {
    backend: B,
    session_path: String,
    language_code: String,
}

impl<B: AgentBackend> ChatSession<B> {
    /// Open a session with a fresh generated id.
    pub fn new(
        backend: B,
        project_id: &str,
        language_code: impl Into<String>,
    ) -> Self {
        let session_id = Uuid::new_v4().simple().to_string();
        Self::with_session_id(backend, project_id, &session_id, language_code)
    }

    /// Open a session with a caller-chosen id (e.g. to resume a
    /// conversation and keep its active contexts).
    pub fn with_session_id(
        backend: B,
        project_id: &str,
        session_id: &str,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            session_path: paths::session(project_id, session_id),
            language_code: language_code.into(),
        }
    }

    /// Full session resource path.
    pub fn session_path(&self) -> &str {
        &self.session_path
    }

    /// Send one utterance and return the NLU result.
    pub async fn detect_intent(&self, query: &str) -> ClientResult<DetectIntentResponse> {
        let input = QueryInput::text(query, &self.language_code);
        tracing::debug!(session = %self.session_path, query, "detect intent");
        self.backend
            .detect_intent(&self.session_path, &input, &self.language_code)
            .await
    }
}
