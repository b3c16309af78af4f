//! Infrastructure layer for prefix selection

pub mod factory;
pub mod scorer;
pub mod selector;

pub use factory::ScorerFactory;
pub use scorer::{RandomScorer, Scorer, Strategy, DEFAULT_RANDOM_SEED, RANDOM_SCORE_BOUND};
pub use selector::PrefixSelector;
