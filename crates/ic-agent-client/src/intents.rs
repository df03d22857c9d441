//! Intent and entity-type management with create-or-update semantics.
//!
//! `IntentManager` mirrors the remote agent locally: it loads intents and
//! entity types up front, keeps the caches in sync after every mutation,
//! and resolves training-phrase markers through `ic-annotate` when building
//! create/update requests.

use ic_annotate::{annotate, EntityTypeRegistry};
use ic_protocol::{
    paths, Context, EntityType, Intent, Message, TrainingPhrase, WebhookState,
};

use crate::backend::AgentBackend;
use crate::error::ClientResult;

/// Everything needed to create (or update) one intent.
#[derive(Debug, Clone)]
pub struct IntentSpec {
    pub display_name: String,
    /// Raw phrases; entity markers (`name@type`) are resolved on submit.
    pub training_phrases: Vec<String>,
    /// Canned text responses (one message, possibly multiple alternatives).
    pub messages: Vec<String>,
    /// Bare context ids; expanded to full session-context paths.
    pub input_contexts: Vec<String>,
    /// `(context_id, lifespan_count)` pairs.
    pub output_contexts: Vec<(String, i32)>,
    pub is_fallback: bool,
    pub webhook_state: WebhookState,
}

impl IntentSpec {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            training_phrases: Vec::new(),
            messages: Vec::new(),
            input_contexts: Vec::new(),
            output_contexts: Vec::new(),
            is_fallback: false,
            webhook_state: WebhookState::default(),
        }
    }

    pub fn phrases<S: Into<String>>(mut self, phrases: Vec<S>) -> Self {
        self.training_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(text.into());
        self
    }

    pub fn input_context(mut self, context_id: impl Into<String>) -> Self {
        self.input_contexts.push(context_id.into());
        self
    }

    pub fn output_context(mut self, context_id: impl Into<String>, lifespan: i32) -> Self {
        self.output_contexts.push((context_id.into(), lifespan));
        self
    }

    pub fn fallback(mut self) -> Self {
        self.is_fallback = true;
        self
    }

    pub fn webhook_state(mut self, state: WebhookState) -> Self {
        self.webhook_state = state;
        self
    }
}

/// Cached view of the remote agent plus the mutations it supports.
pub struct IntentManager<B: AgentBackend> {
    backend: B,
    project_id: String,
    language_code: String,
    intents: Vec<Intent>,
    entity_types: Vec<EntityType>,
    /// Scoped input contexts applied to every intent created while pushed.
    input_context_stack: Vec<Vec<String>>,
}

impl<B: AgentBackend> IntentManager<B> {
    /// Connect to a backend and load the agent's intents and entity types.
    pub async fn connect(
        backend: B,
        project_id: impl Into<String>,
        language_code: impl Into<String>,
    ) -> ClientResult<Self> {
        let mut manager = Self {
            backend,
            project_id: project_id.into(),
            language_code: language_code.into(),
            intents: Vec::new(),
            entity_types: Vec::new(),
            input_context_stack: Vec::new(),
        };
        tracing::info!(project_id = %manager.project_id, "connecting to agent");
        manager.reload_intents().await?;
        manager.reload_entity_types().await?;
        Ok(manager)
    }

    async fn reload_intents(&mut self) -> ClientResult<()> {
        self.intents = self.backend.list_intents().await?;
        tracing::info!(count = self.intents.len(), "loaded intents");
        Ok(())
    }

    async fn reload_entity_types(&mut self) -> ClientResult<()> {
        self.entity_types = self.backend.list_entity_types().await?;
        tracing::info!(count = self.entity_types.len(), "loaded entity types");
        Ok(())
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn entity_types(&self) -> &[EntityType] {
        &self.entity_types
    }

    pub fn find_intent(&self, display_name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.display_name == display_name)
    }

    pub fn find_entity_type(&self, display_name: &str) -> Option<&EntityType> {
        self.entity_types
            .iter()
            .find(|t| t.display_name == display_name)
    }

    /// Registry snapshot of the cached entity types, for annotation.
    pub fn registry(&self) -> EntityTypeRegistry {
        self.entity_types.iter().cloned().collect()
    }

    /// Create or update a list-kind entity type.
    pub async fn create_entity<S: Into<String>>(
        &mut self,
        display_name: impl Into<String>,
        values: Vec<S>,
    ) -> ClientResult<()> {
        self.upsert_entity_type(EntityType::list(display_name, values))
            .await
    }

    /// Create or update a map-kind entity type from `(value, synonyms)`.
    pub async fn create_entity_map<S: Into<String>>(
        &mut self,
        display_name: impl Into<String>,
        pairs: Vec<(S, Vec<S>)>,
    ) -> ClientResult<()> {
        self.upsert_entity_type(EntityType::map(display_name, pairs))
            .await
    }

    /// Create-or-update by display name: an existing record keeps its
    /// resource name and gets updated in place.
    pub async fn upsert_entity_type(&mut self, mut entity_type: EntityType) -> ClientResult<()> {
        match self.find_entity_type(&entity_type.display_name) {
            Some(existing) => {
                entity_type.name = existing.name.clone();
                tracing::info!(display_name = %entity_type.display_name, "updating entity type");
                self.backend
                    .update_entity_type(&entity_type, &self.language_code)
                    .await?;
            }
            None => {
                tracing::info!(display_name = %entity_type.display_name, "creating entity type");
                self.backend
                    .create_entity_type(&entity_type, &self.language_code)
                    .await?;
            }
        }
        self.reload_entity_types().await
    }

    /// Delete every entity type of the agent.
    pub async fn delete_all_entities(&mut self) -> ClientResult<()> {
        let names: Vec<String> = self
            .entity_types
            .iter()
            .filter_map(|t| t.name.clone())
            .collect();
        for name in names {
            self.backend.delete_entity_type(&name).await?;
        }
        self.reload_entity_types().await
    }

    /// Create or update an intent from a spec.
    ///
    /// Training phrases are annotated against the cached entity types;
    /// an unknown marker type aborts the whole operation before anything
    /// is sent to the backend.
    pub async fn create_intent(&mut self, spec: IntentSpec) -> ClientResult<()> {
        let registry = self.registry();
        let mut training_phrases = Vec::with_capacity(spec.training_phrases.len());
        for phrase in &spec.training_phrases {
            let parts = annotate(phrase, &registry)?;
            training_phrases.push(TrainingPhrase::example(parts));
        }

        let mut input_contexts = spec.input_contexts.clone();
        for scope in &self.input_context_stack {
            input_contexts.extend(scope.iter().cloned());
        }

        let mut intent = Intent::new(&spec.display_name);
        intent.is_fallback = spec.is_fallback;
        intent.webhook_state = spec.webhook_state;
        intent.training_phrases = training_phrases;
        intent.input_context_names = input_contexts
            .iter()
            .map(|c| paths::session_context(&self.project_id, c))
            .collect();
        intent.output_contexts = spec
            .output_contexts
            .iter()
            .map(|(c, lifespan)| Context {
                name: paths::session_context(&self.project_id, c),
                lifespan_count: *lifespan,
            })
            .collect();
        if !spec.messages.is_empty() {
            intent.messages = vec![Message::text_message(spec.messages.clone())];
        }

        match self.find_intent(&spec.display_name) {
            Some(existing) => {
                intent.name = existing.name.clone();
                tracing::info!(display_name = %spec.display_name, "intent exists, updating");
                self.backend
                    .update_intent(&intent, &self.language_code)
                    .await?;
            }
            None => {
                tracing::info!(display_name = %spec.display_name, "creating intent");
                self.backend
                    .create_intent(&intent, &self.language_code)
                    .await?;
            }
        }
        self.reload_intents().await
    }

    /// Delete every intent of the agent.
    pub async fn delete_all_intents(&mut self) -> ClientResult<()> {
        let names: Vec<String> = self.intents.iter().filter_map(|i| i.name.clone()).collect();
        for name in names {
            self.backend.delete_intent(&name).await?;
        }
        self.reload_intents().await
    }

    /// Push a set of input contexts applied to every intent created until
    /// the matching [`pop_input_contexts`](Self::pop_input_contexts).
    pub fn push_input_contexts<S: Into<String>>(&mut self, contexts: Vec<S>) {
        self.input_context_stack
            .push(contexts.into_iter().map(Into::into).collect());
    }

    /// Pop the innermost input-context scope.
    pub fn pop_input_contexts(&mut self) -> Option<Vec<String>> {
        self.input_context_stack.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::mock::MockBackend;
    use ic_protocol::Part;

    async fn manager() -> IntentManager<MockBackend> {
        IntentManager::connect(MockBackend::new("demo-agent"), "demo-agent", "de")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn connect_loads_caches() {
        let m = IntentManager::connect(
            MockBackend::with_sample_agent("demo-agent").await,
            "demo-agent",
            "de",
        )
        .await
        .unwrap();
        assert_eq!(m.intents().len(), 1);
        assert_eq!(m.entity_types().len(), 1);
        assert!(m.find_intent("Yes").is_some());
        assert!(m.find_entity_type("colors").is_some());
    }

    #[tokio::test]
    async fn create_intent_plain_phrases() {
        let mut m = manager().await;
        m.create_intent(IntentSpec::new("Yes").phrases(vec!["yes", "yeah"]))
            .await
            .unwrap();

        let intent = m.find_intent("Yes").unwrap();
        assert!(intent.name.is_some());
        assert_eq!(intent.training_phrases.len(), 2);
        assert_eq!(intent.training_phrases[0].parts, vec![Part::text("yes")]);
        assert_eq!(intent.webhook_state, WebhookState::Unspecified);
        assert!(!intent.is_fallback);
    }

    #[tokio::test]
    async fn create_intent_twice_updates_in_place() {
        let mut m = manager().await;
        m.create_intent(IntentSpec::new("Yes").phrases(vec!["yes"]))
            .await
            .unwrap();
        let first_name = m.find_intent("Yes").unwrap().name.clone();

        m.create_intent(IntentSpec::new("Yes").phrases(vec!["yes", "yeah", "sure"]))
            .await
            .unwrap();
        assert_eq!(m.intents().len(), 1);
        let updated = m.find_intent("Yes").unwrap();
        assert_eq!(updated.name, first_name);
        assert_eq!(updated.training_phrases.len(), 3);
    }

    #[tokio::test]
    async fn create_intent_annotates_markers() {
        let mut m = manager().await;
        m.create_entity_map(
            "colors",
            vec![("red", vec!["red", "rot"]), ("blue", vec!["blue", "blau"])],
        )
        .await
        .unwrap();

        m.create_intent(
            IntentSpec::new("ColorSelect").phrases(vec!["I want it in color@colors please"]),
        )
        .await
        .unwrap();

        let intent = m.find_intent("ColorSelect").unwrap();
        assert_eq!(
            intent.training_phrases[0].parts[1],
            Part::entity("red", "@colors", "color")
        );
    }

    #[tokio::test]
    async fn unknown_marker_aborts_before_submit() {
        let mut m = manager().await;
        let err = m
            .create_intent(IntentSpec::new("SizeSelect").phrases(vec!["in size@sizes please"]))
            .await;
        assert!(matches!(err, Err(ClientError::Annotate(_))));
        assert!(m.intents().is_empty());
    }

    #[tokio::test]
    async fn entity_upsert_keeps_resource_name() {
        let mut m = manager().await;
        m.create_entity("sizes", vec!["S", "M"]).await.unwrap();
        let first_name = m.find_entity_type("sizes").unwrap().name.clone();

        m.create_entity("sizes", vec!["S", "M", "L"]).await.unwrap();
        assert_eq!(m.entity_types().len(), 1);
        let updated = m.find_entity_type("sizes").unwrap();
        assert_eq!(updated.name, first_name);
        assert_eq!(updated.entries.len(), 3);
    }

    #[tokio::test]
    async fn delete_all_clears_both_sides() {
        let mut m = IntentManager::connect(
            MockBackend::with_sample_agent("demo-agent").await,
            "demo-agent",
            "de",
        )
        .await
        .unwrap();
        m.delete_all_intents().await.unwrap();
        m.delete_all_entities().await.unwrap();
        assert!(m.intents().is_empty());
        assert!(m.entity_types().is_empty());
    }

    #[tokio::test]
    async fn context_ids_expand_to_full_paths() {
        let mut m = manager().await;
        m.create_intent(
            IntentSpec::new("OrderPizza")
                .phrases(vec!["a pizza please"])
                .input_context("ordering")
                .output_context("awaiting-size", 5),
        )
        .await
        .unwrap();

        let intent = m.find_intent("OrderPizza").unwrap();
        assert_eq!(
            intent.input_context_names,
            vec!["projects/demo-agent/agent/sessions/-/contexts/ordering"]
        );
        assert_eq!(
            intent.output_contexts[0].name,
            "projects/demo-agent/agent/sessions/-/contexts/awaiting-size"
        );
        assert_eq!(intent.output_contexts[0].lifespan_count, 5);
    }

    #[tokio::test]
    async fn pushed_contexts_apply_until_popped() {
        let mut m = manager().await;
        m.push_input_contexts(vec!["checkout"]);
        m.create_intent(IntentSpec::new("PayNow").phrases(vec!["pay now"]))
            .await
            .unwrap();
        m.pop_input_contexts();
        m.create_intent(IntentSpec::new("Greet").phrases(vec!["hello"]))
            .await
            .unwrap();

        assert_eq!(
            m.find_intent("PayNow").unwrap().input_context_names,
            vec!["projects/demo-agent/agent/sessions/-/contexts/checkout"]
        );
        assert!(m.find_intent("Greet").unwrap().input_context_names.is_empty());
    }

    #[tokio::test]
    async fn messages_become_single_text_message() {
        let mut m = manager().await;
        m.create_intent(
            IntentSpec::new("Yes")
                .phrases(vec!["yes"])
                .message("Great!")
                .message("Wonderful!"),
        )
        .await
        .unwrap();

        let intent = m.find_intent("Yes").unwrap();
        assert_eq!(intent.messages.len(), 1);
        assert_eq!(intent.messages[0].text, vec!["Great!", "Wonderful!"]);
    }
}
