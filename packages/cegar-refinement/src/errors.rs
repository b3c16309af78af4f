//! Error types for cegar-refinement
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::prefix_selection::SelectionError;

/// Main error type for cegar-refinement operations
#[derive(Debug, Error)]
pub enum RefinementError {
    /// Prefix selection error
    #[error("Prefix selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for refinement operations
pub type Result<T> = std::result::Result<T, RefinementError>;
