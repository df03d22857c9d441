//! End-to-end integration tests for intentcraft.
//!
//! This crate carries no runtime code; everything lives under `tests/`,
//! driving the full create-entity → annotate → create-intent →
//! detect-intent flow through `MockBackend`.
