use serde::{Deserialize, Serialize};

/// Whether the service should call the agent's webhook for this intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WebhookState {
    #[default]
    #[serde(rename = "WEBHOOK_STATE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "WEBHOOK_STATE_ENABLED")]
    Enabled,
    #[serde(rename = "WEBHOOK_STATE_ENABLED_FOR_SLOT_FILLING")]
    EnabledForSlotFilling,
}

/// One segment of a training phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Annotated segment referencing an entity type.
    Entity {
        /// Sample value drawn from the referenced type's first entry.
        text: String,
        /// `@`-prefixed entity type identifier (e.g. `@colors`).
        #[serde(rename = "entityType")]
        entity_type: String,
        /// Parameter name the matched value binds to.
        alias: String,
    },
    /// Literal text segment.
    Text { text: String },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn entity(
        text: impl Into<String>,
        entity_type: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self::Entity {
            text: text.into(),
            entity_type: entity_type.into(),
            alias: alias.into(),
        }
    }

    /// The literal text this part contributes to the phrase surface.
    pub fn text_span(&self) -> &str {
        match self {
            Self::Text { text } | Self::Entity { text, .. } => text,
        }
    }

    /// Reconstruct the `alias@type` marker for an entity part.
    /// Returns `None` for plain text parts.
    pub fn marker(&self) -> Option<String> {
        match self {
            Self::Text { .. } => None,
            Self::Entity {
                entity_type, alias, ..
            } => Some(format!(
                "{alias}@{}",
                entity_type.strip_prefix('@').unwrap_or(entity_type)
            )),
        }
    }
}

/// How a training phrase was authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PhraseKind {
    /// Annotated example utterance. The only kind this toolkit produces.
    #[default]
    #[serde(rename = "EXAMPLE")]
    Example,
    #[serde(rename = "TEMPLATE")]
    Template,
}

/// An example utterance the service trains its matcher on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPhrase {
    #[serde(rename = "type")]
    pub kind: PhraseKind,
    pub parts: Vec<Part>,
}

impl TrainingPhrase {
    pub fn example(parts: Vec<Part>) -> Self {
        Self {
            kind: PhraseKind::Example,
            parts,
        }
    }

    /// Concatenated surface text of all parts.
    pub fn surface_text(&self) -> String {
        self.parts.iter().map(Part::text_span).collect()
    }
}

/// A canned text response attached to an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: Vec<String>,
}

impl Message {
    pub fn text_message<S: Into<String>>(lines: Vec<S>) -> Self {
        Self {
            text: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A conversational context with a bounded lifespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Full resource name (`projects/{p}/agent/sessions/-/contexts/{id}`).
    pub name: String,
    /// Number of conversational turns the context stays active.
    pub lifespan_count: i32,
}

/// An intent as known to the agent-management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Server-assigned resource name. Absent until the intent is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default)]
    pub webhook_state: WebhookState,
    #[serde(default)]
    pub training_phrases: Vec<TrainingPhrase>,
    /// Full context resource names this intent requires to be active.
    #[serde(default)]
    pub input_context_names: Vec<String>,
    /// Contexts activated when this intent matches.
    #[serde(default)]
    pub output_contexts: Vec<Context>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Intent {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            name: None,
            display_name: display_name.into(),
            is_fallback: false,
            webhook_state: WebhookState::default(),
            training_phrases: Vec::new(),
            input_context_names: Vec::new(),
            output_contexts: Vec::new(),
            messages: Vec::new(),
        }
    }
}
