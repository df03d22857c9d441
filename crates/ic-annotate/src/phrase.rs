//! The training-phrase annotator.
//!
//! Scans a phrase for inline entity markers of the form `name@type`, where
//! `type` is either a built-in `sys.*` tag or a user-defined entity type
//! name, and emits the ordered part sequence the management API expects.

use regex::Regex;
use std::sync::LazyLock;

use ic_protocol::{Part, SystemEntity};

use crate::error::{AnnotateError, AnnotateResult};
use crate::registry::EntityTypeRegistry;

/// Identifier grammar shared by marker aliases and user-defined type names.
const IDENTIFIER: &str = "[a-zA-Z][a-zA-Z0-9_-]*";

// Combined marker pattern: `alias@(builtin|user-defined)`. The built-in
// alternation comes first, so `sys.*` tags win over the identifier grammar
// when both could match.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{IDENTIFIER}@({}|{IDENTIFIER})",
        SystemEntity::alternation()
    ))
    .unwrap()
});

/// Annotate one training phrase against the registry.
///
/// Returns the ordered part list: plain text segments interleaved with
/// entity segments for each marker. The entity segment's `text` is the
/// value of the referenced type's first registered entry — the annotator
/// never tries to match the alias against a specific entry.
///
/// Fails atomically with [`AnnotateError::UnknownEntityType`] when a marker
/// references a type the registry doesn't hold; no partial part list is
/// returned.
///
/// Boundary quirk, preserved for compatibility with agents built by earlier
/// tooling: the phrase remainder after the last marker is emitted only when
/// the cursor differs from `len - 1`. A phrase ending exactly at a marker
/// therefore gains an empty trailing text part, and a phrase with exactly
/// one byte after the last marker drops that byte. Pinned by the
/// `trailing_*` tests below; the corrected comparison would be against
/// `len`.
pub fn annotate(phrase: &str, registry: &EntityTypeRegistry) -> AnnotateResult<Vec<Part>> {
    if !phrase.contains('@') {
        return Ok(vec![Part::text(phrase)]);
    }

    tracing::debug!(phrase, "phrase contains entity markers");

    let mut parts = Vec::new();
    let mut cursor = 0usize;

    for m in MARKER.find_iter(phrase) {
        let between = &phrase[cursor..m.start()];
        if !between.is_empty() {
            tracing::debug!(text = between, "text segment");
            parts.push(Part::text(between));
        }

        // The match always contains exactly one '@' outside the type: the
        // alias grammar excludes it and `sys.*` tags don't carry one.
        let (alias, type_name) = m.as_str().split_once('@').unwrap_or((m.as_str(), ""));
        tracing::debug!(alias, entity_type = type_name, "entity segment");

        let record =
            registry
                .find(type_name)
                .ok_or_else(|| AnnotateError::UnknownEntityType {
                    display_name: type_name.to_string(),
                })?;
        let sample = record
            .first_value()
            .ok_or_else(|| AnnotateError::EmptyEntityType {
                display_name: type_name.to_string(),
            })?;

        parts.push(Part::entity(sample, format!("@{type_name}"), alias));
        cursor = m.end();
    }

    if cursor != phrase.len() - 1 {
        let text = &phrase[cursor..];
        tracing::debug!(text, "trailing text segment");
        parts.push(Part::text(text));
    }

    Ok(parts)
}
