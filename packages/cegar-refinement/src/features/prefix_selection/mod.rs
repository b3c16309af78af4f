//! Infeasible Prefix Selection
//!
//! When a counterexample turns out spurious, the path is sliced into several
//! infeasible prefixes. Which of them feeds interpolation decides the
//! precision of the refinement, how fast the analysis terminates and how
//! much its abstraction grows. This feature ranks the candidates:
//! - Scores each prefix under an ordered list of heuristics
//! - Picks the lexicographically best prefix (earliest wins ties)
//! - Rates a whole batch under one heuristic
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - PrefixPreference (LENGTH_MIN, ...)   │
//! │  - Score / SENTINEL                     │
//! │  - InfeasiblePrefix, PrefixSummary      │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - Scorer / Strategy (8 + inversion)    │
//! │  - ScorerFactory (owns RANDOM state)    │
//! │  - PrefixSelector (entry point)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cegar_refinement::features::prefix_selection::{PrefixPreference, PrefixSelector};
//!
//! let selector = PrefixSelector::new(Some(classification), Some(loops));
//! let prefix = selector.select_best(
//!     &[PrefixPreference::DomainMin, PrefixPreference::LengthMin],
//!     &prefixes,
//! )?;
//! let quality = selector.aggregate_score(&prefixes, PrefixPreference::DomainMin)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

// Re-export application layer
pub use application::{PrefixSelectionUseCase, PrefixSelectionUseCaseImpl};

// Domain models
pub use domain::{
    invert_score, is_sentinel, parse_preference_list, InfeasiblePrefix, ParsePreferenceError,
    PrefixPreference, PrefixSummary, Score, NO_SELECTION, SENTINEL,
};

pub use error::{SelectionError, SelectionResult};

pub use infrastructure::{
    PrefixSelector, RandomScorer, Scorer, ScorerFactory, Strategy, DEFAULT_RANDOM_SEED,
    RANDOM_SCORE_BOUND,
};

pub use ports::{LoopStructure, VariableClassification};
