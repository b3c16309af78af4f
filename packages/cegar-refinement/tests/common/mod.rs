//! Common test utilities for cegar-refinement
//!
//! Shared fixtures and builders for the integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

// Re-export all utilities
pub use builders::*;
pub use fixtures::*;
