use serde::{Deserialize, Serialize};

/// How the remote service interprets an entity type's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EntityKind {
    /// Each entry is a standalone value (synonyms equal the value itself).
    #[default]
    #[serde(rename = "KIND_LIST")]
    List,
    /// Each entry maps a canonical value to a set of synonyms.
    #[serde(rename = "KIND_MAP")]
    Map,
}

/// Whether the service may expand an entity type beyond its registered
/// entries when matching user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AutoExpansionMode {
    #[default]
    #[serde(rename = "AUTO_EXPANSION_MODE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "AUTO_EXPANSION_MODE_DEFAULT")]
    Default,
}

/// One registered entry of an entity type: a canonical value plus the
/// synonyms that should resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEntry {
    pub value: String,
    pub synonyms: Vec<String>,
}

impl EntityEntry {
    pub fn new(value: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            value: value.into(),
            synonyms,
        }
    }
}

/// A user-defined entity type as known to the agent-management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    /// Server-assigned resource name. Absent until the type is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable name; unique per agent, referenced from phrases.
    pub display_name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub auto_expansion_mode: AutoExpansionMode,
    /// Ordered entries. The annotator samples the first one.
    #[serde(default, rename = "entities")]
    pub entries: Vec<EntityEntry>,
}

impl EntityType {
    /// Build a list-kind entity type: every value is its own synonym.
    pub fn list<S: Into<String>>(display_name: impl Into<String>, values: Vec<S>) -> Self {
        let entries = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                EntityEntry {
                    synonyms: vec![v.clone()],
                    value: v,
                }
            })
            .collect();
        Self {
            name: None,
            display_name: display_name.into(),
            kind: EntityKind::List,
            auto_expansion_mode: AutoExpansionMode::default(),
            entries,
        }
    }

    /// Build a map-kind entity type from `(value, synonyms)` pairs.
    pub fn map<S: Into<String>>(
        display_name: impl Into<String>,
        pairs: Vec<(S, Vec<S>)>,
    ) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(value, synonyms)| EntityEntry {
                value: value.into(),
                synonyms: synonyms.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self {
            name: None,
            display_name: display_name.into(),
            kind: EntityKind::Map,
            auto_expansion_mode: AutoExpansionMode::default(),
            entries,
        }
    }

    pub fn with_auto_expansion(mut self, mode: AutoExpansionMode) -> Self {
        self.auto_expansion_mode = mode;
        self
    }

    /// Canonical value of the first registered entry, if any.
    pub fn first_value(&self) -> Option<&str> {
        self.entries.first().map(|e| e.value.as_str())
    }
}
