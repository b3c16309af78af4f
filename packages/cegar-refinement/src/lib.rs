/*
 * CEGAR Refinement - Infeasible Prefix Selection
 *
 * Feature-First Hexagonal Architecture:
 * - features/  : Vertical slices (prefix_selection)
 * - config/    : Selection configuration (preset → override → YAML)
 * - errors     : Crate-level error type
 *
 * Given the infeasible prefixes sliced from a spurious counterexample,
 * pick the one to hand to interpolation, or rate a batch of them.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::upper_case_acronyms)] // CEGAR naming
#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{RefinementError, Result};
pub use features::prefix_selection::{
    InfeasiblePrefix, LoopStructure, PrefixPreference, PrefixSelector, PrefixSummary, Score,
    SelectionError, VariableClassification, NO_SELECTION, SENTINEL,
};
