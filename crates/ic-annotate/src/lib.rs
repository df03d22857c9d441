//! Training-phrase entity annotation for intentcraft.
//!
//! Parses human-authored training phrases containing inline entity markers
//! (`text@entity_type`) into the ordered part sequences the agent-management
//! API expects, resolving marker types against an in-memory
//! `EntityTypeRegistry`.

pub mod error;
pub mod mock;
pub mod phrase;
pub mod registry;

// Re-export key types for convenience
pub use error::{AnnotateError, AnnotateResult};
pub use phrase::annotate;
pub use registry::EntityTypeRegistry;
