//! In-memory mock backend for tests — no network, no credentials.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use ic_protocol::{
    paths, DetectIntentResponse, EntityType, Intent, QueryInput, QueryResult,
};

use crate::backend::AgentBackend;
use crate::error::{ClientError, ClientResult};

/// A mock agent backend holding intents and entity types in memory.
///
/// Resource names are assigned from fresh UUIDs. `detect_intent` is a
/// deliberate stub: lowercased exact match against training-phrase surface
/// text, falling back to the registered fallback intent. Enough to run the
/// full create/annotate/detect flow offline.
pub struct MockBackend {
    project_id: String,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    intents: Vec<Intent>,
    entity_types: Vec<EntityType>,
}

impl MockBackend {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            state: Mutex::new(State::default()),
        }
    }

    /// Mock pre-loaded with a map-kind `colors` type and a `Yes` intent,
    /// mirroring the sample agent the system tests build.
    pub async fn with_sample_agent(project_id: impl Into<String>) -> Self {
        let mock = Self::new(project_id);
        let colors = EntityType::map(
            "colors",
            vec![
                ("red", vec!["red", "rot"]),
                ("blue", vec!["blue", "blau"]),
                ("green", vec!["green", "gruen"]),
            ],
        );
        mock.create_entity_type(&colors, "de")
            .await
            .expect("sample entity type");

        let mut yes = Intent::new("Yes");
        yes.training_phrases = vec![
            ic_protocol::TrainingPhrase::example(vec![ic_protocol::Part::text("yes")]),
            ic_protocol::TrainingPhrase::example(vec![ic_protocol::Part::text("yeah")]),
        ];
        mock.create_intent(&yes, "de").await.expect("sample intent");
        mock
    }

    fn fresh_intent_name(&self) -> String {
        paths::intent(&self.project_id, &Uuid::new_v4().simple().to_string())
    }

    fn fresh_entity_type_name(&self) -> String {
        paths::entity_type(&self.project_id, &Uuid::new_v4().simple().to_string())
    }
}

#[async_trait]
impl AgentBackend for MockBackend {
    async fn list_intents(&self) -> ClientResult<Vec<Intent>> {
        Ok(self.state.lock().await.intents.clone())
    }

    async fn create_intent(&self, intent: &Intent, _language_code: &str) -> ClientResult<Intent> {
        let mut state = self.state.lock().await;
        if state
            .intents
            .iter()
            .any(|i| i.display_name == intent.display_name)
        {
            return Err(ClientError::Duplicate(format!(
                "intent '{}'",
                intent.display_name
            )));
        }
        let mut created = intent.clone();
        created.name = Some(self.fresh_intent_name());
        state.intents.push(created.clone());
        Ok(created)
    }

    async fn update_intent(&self, intent: &Intent, _language_code: &str) -> ClientResult<Intent> {
        let name = intent
            .name
            .as_deref()
            .ok_or_else(|| ClientError::NotFound("intent without resource name".into()))?;
        let mut state = self.state.lock().await;
        let slot = state
            .intents
            .iter_mut()
            .find(|i| i.name.as_deref() == Some(name))
            .ok_or_else(|| ClientError::NotFound(format!("intent {name}")))?;
        *slot = intent.clone();
        Ok(intent.clone())
    }

    async fn delete_intent(&self, name: &str) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        let before = state.intents.len();
        state.intents.retain(|i| i.name.as_deref() != Some(name));
        if state.intents.len() == before {
            return Err(ClientError::NotFound(format!("intent {name}")));
        }
        Ok(())
    }

    async fn list_entity_types(&self) -> ClientResult<Vec<EntityType>> {
        Ok(self.state.lock().await.entity_types.clone())
    }

    async fn create_entity_type(
        &self,
        entity_type: &EntityType,
        _language_code: &str,
    ) -> ClientResult<EntityType> {
        let mut state = self.state.lock().await;
        if state
            .entity_types
            .iter()
            .any(|t| t.display_name == entity_type.display_name)
        {
            return Err(ClientError::Duplicate(format!(
                "entity type '{}'",
                entity_type.display_name
            )));
        }
        let mut created = entity_type.clone();
        created.name = Some(self.fresh_entity_type_name());
        state.entity_types.push(created.clone());
        Ok(created)
    }

    async fn update_entity_type(
        &self,
        entity_type: &EntityType,
        _language_code: &str,
    ) -> ClientResult<EntityType> {
        let name = entity_type
            .name
            .as_deref()
            .ok_or_else(|| ClientError::NotFound("entity type without resource name".into()))?;
        let mut state = self.state.lock().await;
        let slot = state
            .entity_types
            .iter_mut()
            .find(|t| t.name.as_deref() == Some(name))
            .ok_or_else(|| ClientError::NotFound(format!("entity type {name}")))?;
        *slot = entity_type.clone();
        Ok(entity_type.clone())
    }

    async fn delete_entity_type(&self, name: &str) -> ClientResult<()> {
        let mut state = self.state.lock().await;
        let before = state.entity_types.len();
        state
            .entity_types
            .retain(|t| t.name.as_deref() != Some(name));
        if state.entity_types.len() == before {
            return Err(ClientError::NotFound(format!("entity type {name}")));
        }
        Ok(())
    }

    async fn detect_intent(
        &self,
        _session_path: &str,
        query: &QueryInput,
        language_code: &str,
    ) -> ClientResult<DetectIntentResponse> {
        let QueryInput::Text(input) = query;
        let needle = input.text.to_lowercase();
        let state = self.state.lock().await;

        let matched = state.intents.iter().find(|intent| {
            intent
                .training_phrases
                .iter()
                .any(|p| p.surface_text().to_lowercase() == needle)
        });
        let fallback = state.intents.iter().find(|i| i.is_fallback);

        let (intent, confidence) = match (matched, fallback) {
            (Some(i), _) => (Some(i), 1.0),
            (None, Some(f)) => (Some(f), 0.0),
            (None, None) => (None, 0.0),
        };

        Ok(DetectIntentResponse {
            response_id: Uuid::new_v4().simple().to_string(),
            query_result: QueryResult {
                query_text: input.text.clone(),
                language_code: language_code.to_string(),
                intent_display_name: intent.map(|i| i.display_name.clone()),
                intent_detection_confidence: confidence,
                fulfillment_text: intent
                    .and_then(|i| i.messages.first())
                    .and_then(|m| m.text.first())
                    .cloned(),
            },
            responded_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_resource_name() {
        let mock = MockBackend::new("demo-agent");
        let created = mock.create_intent(&Intent::new("Yes"), "de").await.unwrap();
        let name = created.name.unwrap();
        assert!(name.starts_with("projects/demo-agent/agent/intents/"));
        assert_eq!(mock.list_intents().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_display_name_rejected() {
        let mock = MockBackend::new("demo-agent");
        mock.create_intent(&Intent::new("Yes"), "de").await.unwrap();
        let err = mock.create_intent(&Intent::new("Yes"), "de").await;
        assert!(matches!(err, Err(ClientError::Duplicate(_))));
    }

    #[tokio::test]
    async fn update_requires_known_name() {
        let mock = MockBackend::new("demo-agent");
        let err = mock.update_intent(&Intent::new("Yes"), "de").await;
        assert!(matches!(err, Err(ClientError::NotFound(_))));

        let mut ghost = Intent::new("Ghost");
        ghost.name = Some(paths::intent("demo-agent", "missing"));
        let err = mock.update_intent(&ghost, "de").await;
        assert!(matches!(err, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_unknown_entity_type_fails() {
        let mock = MockBackend::new("demo-agent");
        let err = mock
            .delete_entity_type("projects/demo-agent/agent/entityTypes/nope")
            .await;
        assert!(matches!(err, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn detect_intent_exact_match() {
        let mock = MockBackend::with_sample_agent("demo-agent").await;
        let resp = mock
            .detect_intent(
                &paths::session("demo-agent", "s1"),
                &QueryInput::text("yes", "de"),
                "de",
            )
            .await
            .unwrap();
        assert_eq!(resp.query_result.intent_display_name.as_deref(), Some("Yes"));
        assert!((resp.query_result.intent_detection_confidence - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn detect_intent_no_match_without_fallback() {
        let mock = MockBackend::with_sample_agent("demo-agent").await;
        let resp = mock
            .detect_intent(
                &paths::session("demo-agent", "s1"),
                &QueryInput::text("order a pizza", "de"),
                "de",
            )
            .await
            .unwrap();
        assert_eq!(resp.query_result.intent_display_name, None);
        assert_eq!(resp.query_result.intent_detection_confidence, 0.0);
    }

    #[tokio::test]
    async fn detect_intent_uses_fallback() {
        let mock = MockBackend::new("demo-agent");
        let mut fallback = Intent::new("Default Fallback");
        fallback.is_fallback = true;
        fallback.messages = vec![ic_protocol::Message::text_message(vec![
            "Sorry, say that again?",
        ])];
        mock.create_intent(&fallback, "de").await.unwrap();

        let resp = mock
            .detect_intent(
                &paths::session("demo-agent", "s1"),
                &QueryInput::text("gibberish", "de"),
                "de",
            )
            .await
            .unwrap();
        assert_eq!(
            resp.query_result.intent_display_name.as_deref(),
            Some("Default Fallback")
        );
        assert_eq!(
            resp.query_result.fulfillment_text.as_deref(),
            Some("Sorry, say that again?")
        );
    }
}
