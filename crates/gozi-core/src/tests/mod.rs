//! Cross-module tests for sessions and the resolver pipeline.
//!
//! - **Determinism tests**: the same seed produces the same event log
//! - **Integration tests**: full matches, scoring and scripted human turns
//! - **Helper functions**: scripted hosts and battle builders
//!
//! # Test Structure
//!
//! - `determinism.rs`: Tests that verify deterministic execution
//! - `integration.rs`: End-to-end tests of sessions
//! - `helpers.rs`: Test setup utilities and factory functions

mod helpers;

// Re-export for convenience
pub use helpers::*;
