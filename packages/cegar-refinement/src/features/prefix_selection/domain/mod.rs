//! Prefix selection domain models
//!
//! Pure data: preferences, scores and prefix observations.

pub mod preference;
pub mod prefix;
pub mod score;

pub use preference::{parse_preference_list, ParsePreferenceError, PrefixPreference, NO_SELECTION};
pub use prefix::{InfeasiblePrefix, PrefixSummary};
pub use score::{invert_score, is_sentinel, Score, SENTINEL};
