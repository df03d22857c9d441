//! Annotation error types.

use thiserror::Error;

/// Errors that can occur while annotating a training phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    /// A phrase referenced an entity type the registry doesn't know.
    /// Not retried — the caller must create the type and re-run the whole
    /// intent-creation operation.
    #[error(
        "entity type '{display_name}' used but it doesn't exist; \
         create it before referencing it inside an intent"
    )]
    UnknownEntityType { display_name: String },

    /// The referenced entity type has no entries to sample a value from.
    #[error("entity type '{display_name}' has no entries to sample a value from")]
    EmptyEntityType { display_name: String },
}

/// Convenience alias for annotation results.
pub type AnnotateResult<T> = Result<T, AnnotateError>;
