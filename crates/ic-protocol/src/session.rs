use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Natural-language input for a detect-intent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub text: String,
    pub language_code: String,
}

/// The one input form this toolkit sends. Audio/event inputs are the
/// vendor's business and not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryInput {
    Text(TextInput),
}

impl QueryInput {
    pub fn text(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self::Text(TextInput {
            text: text.into(),
            language_code: language_code.into(),
        })
    }
}

/// NLU result for one conversational turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub query_text: String,
    pub language_code: String,
    /// Display name of the matched intent; `None` when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_display_name: Option<String>,
    /// Matcher confidence (0.0 – 1.0).
    pub intent_detection_confidence: f64,
    /// First canned response of the matched intent, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,
}

/// Response to a detect-intent request against a live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentResponse {
    pub response_id: String,
    pub query_result: QueryResult,
    /// When the response was produced. Filled locally when the wire
    /// response doesn't carry it.
    #[serde(default = "Utc::now")]
    pub responded_at: DateTime<Utc>,
}
