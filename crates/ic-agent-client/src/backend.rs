//! The backend seam: everything the remote agent-management service does
//! for us, behind one async trait so the CRUD layer works identically
//! against the HTTP adapter and the in-memory mock.

use async_trait::async_trait;
use std::sync::Arc;

use ic_protocol::{DetectIntentResponse, EntityType, Intent, QueryInput};

use crate::error::ClientResult;

/// Adapter to the remote agent-management API.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// List all intents in full view (training phrases populated).
    async fn list_intents(&self) -> ClientResult<Vec<Intent>>;

    /// Create an intent; returns the record with its server-assigned name.
    async fn create_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent>;

    /// Update an intent in place. The intent must carry its resource name.
    async fn update_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent>;

    /// Delete an intent by resource name.
    async fn delete_intent(&self, name: &str) -> ClientResult<()>;

    /// List all entity types.
    async fn list_entity_types(&self) -> ClientResult<Vec<EntityType>>;

    /// Create an entity type; returns the record with its assigned name.
    async fn create_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType>;

    /// Update an entity type in place. Must carry its resource name.
    async fn update_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType>;

    /// Delete an entity type by resource name.
    async fn delete_entity_type(&self, name: &str) -> ClientResult<()>;

    /// Run NLU inference for one utterance against a live session.
    async fn detect_intent(
        &self,
        session_path: &str,
        query: &QueryInput,
        language_code: &str,
    ) -> ClientResult<DetectIntentResponse>;
}

// Shared-ownership delegation so a manager and a chat session can drive
// the same backend instance.
#[async_trait]
impl<B: AgentBackend + ?Sized> AgentBackend for Arc<B> {
    async fn list_intents(&self) -> ClientResult<Vec<Intent>> {
        (**self).list_intents().await
    }

    async fn create_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent> {
        (**self).create_intent(intent, language_code).await
    }

    async fn update_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent> {
        (**self).update_intent(intent, language_code).await
    }

    async fn delete_intent(&self, name: &str) -> ClientResult<()> {
        (**self).delete_intent(name).await
    }

    async fn list_entity_types(&self) -> ClientResult<Vec<EntityType>> {
        (**self).list_entity_types().await
    }

    async fn create_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType> {
        (**self).create_entity_type(entity_type, language_code).await
    }

    async fn update_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType> {
        (**self).update_entity_type(entity_type, language_code).await
    }

    async fn delete_entity_type(&self, name: &str) -> ClientResult<()> {
        (**self).delete_entity_type(name).await
    }

    async fn detect_intent(
        &self,
        session_path: &str,
        query: &QueryInput,
        language_code: &str,
    ) -> ClientResult<DetectIntentResponse> {
        (**self)
            .detect_intent(session_path, query, language_code)
            .await
    }
}
