//! Resource-name builders and parsers for the agent-management API.
//!
//! Resource name grammar:
//! ```text
//! projects/{project_id}/agent
//! projects/{project_id}/agent/intents/{intent_id}
//! projects/{project_id}/agent/entityTypes/{entity_type_id}
//! projects/{project_id}/agent/sessions/{session_id}
//! projects/{project_id}/agent/sessions/-/contexts/{context_id}
//! ```

const PREFIX: &str = "projects";

/// Root of the project's agent — parent of intents and entity types.
pub fn project_agent(project_id: &str) -> String {
    format!("{PREFIX}/{project_id}/agent")
}

pub fn intent(project_id: &str, intent_id: &str) -> String {
    format!("{PREFIX}/{project_id}/agent/intents/{intent_id}")
}

pub fn entity_type(project_id: &str, entity_type_id: &str) -> String {
    format!("{PREFIX}/{project_id}/agent/entityTypes/{entity_type_id}")
}

pub fn session(project_id: &str, session_id: &str) -> String {
    format!("{PREFIX}/{project_id}/agent/sessions/{session_id}")
}

/// Session-independent context path, as used for intent input/output
/// contexts (`-` stands for "any session").
pub fn session_context(project_id: &str, context_id: &str) -> String {
    format!("{PREFIX}/{project_id}/agent/sessions/-/contexts/{context_id}")
}

/// Last path segment of a resource name — the server-assigned id.
pub fn resource_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// What kind of agent resource a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Agent,
    Intent,
    EntityType,
    Session,
    Context,
}

/// Parsed components of an agent resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResource {
    pub project_id: String,
    pub kind: ResourceKind,
    /// Trailing id; `None` for the bare agent path.
    pub id: Option<String>,
}

/// Parse a resource name into its components.
/// Returns `None` if the name doesn't match the expected grammar.
pub fn parse_resource(name: &str) -> Option<ParsedResource> {
    let parts: Vec<&str> = name.split('/').collect();

    if parts.first() != Some(&PREFIX) || parts.get(2) != Some(&"agent") {
        return None;
    }
    let project_id = parts[1].to_string();

    match &parts[3..] {
        [] => Some(ParsedResource {
            project_id,
            kind: ResourceKind::Agent,
            id: None,
        }),
        ["intents", id] => Some(ParsedResource {
            project_id,
            kind: ResourceKind::Intent,
            id: Some(id.to_string()),
        }),
        ["entityTypes", id] => Some(ParsedResource {
            project_id,
            kind: ResourceKind::EntityType,
            id: Some(id.to_string()),
        }),
        ["sessions", _, "contexts", id] => Some(ParsedResource {
            project_id,
            kind: ResourceKind::Context,
            id: Some(id.to_string()),
        }),
        ["sessions", id] => Some(ParsedResource {
            project_id,
            kind: ResourceKind::Session,
            id: Some(id.to_string()),
        }),
        _ => None,
    }
}
