//! Scorer factory
//!
//! Maps a preference to its scorer. MIN preferences get the base strategy,
//! MAX preferences the inverted one. The RANDOM generator is created once per
//! factory and shared by every RANDOM scorer it hands out; recreating it per
//! request would replay the same numbers every round.

use std::sync::Arc;

use super::scorer::{RandomScorer, Scorer, Strategy, DEFAULT_RANDOM_SEED};
use crate::features::prefix_selection::domain::PrefixPreference;
use crate::features::prefix_selection::error::{SelectionError, SelectionResult};
use crate::features::prefix_selection::ports::{LoopStructure, VariableClassification};

/// Builds scorers over one (optional) classification and loop structure
#[derive(Debug)]
pub struct ScorerFactory {
    classification: Option<Arc<dyn VariableClassification>>,
    loop_structure: Option<Arc<dyn LoopStructure>>,
    random: RandomScorer,
}

impl ScorerFactory {
    /// Create a factory whose random scorer uses the default seed
    pub fn new(
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
    ) -> Self {
        Self::with_seed(classification, loop_structure, DEFAULT_RANDOM_SEED)
    }

    /// Create a factory with an explicit random seed
    pub fn with_seed(
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
        seed: u64,
    ) -> Self {
        Self {
            classification,
            loop_structure,
            random: RandomScorer::new(seed),
        }
    }

    /// Scorer for `preference`.
    ///
    /// Fails with [`SelectionError::UnsupportedPreference`] for `NONE`.
    pub fn make_scorer(&self, preference: PrefixPreference) -> SelectionResult<Scorer<'_>> {
        use PrefixPreference as P;

        let strategy = match preference {
            P::LengthMin => Strategy::Length,
            P::LengthMax => Strategy::Length.invert(),
            P::DomainMin => Strategy::Domain,
            P::DomainMax => Strategy::Domain.invert(),
            P::LoopsMin => Strategy::Loop,
            P::LoopsMax => Strategy::Loop.invert(),
            P::PivotMin => Strategy::Depth,
            P::PivotMax => Strategy::Depth.invert(),
            P::WidthMin => Strategy::Width,
            P::WidthMax => Strategy::Width.invert(),
            P::AssignmentsMin => Strategy::Assignment,
            P::AssignmentsMax => Strategy::Assignment.invert(),
            P::AssumptionsMin => Strategy::Assumption,
            P::AssumptionsMax => Strategy::Assumption.invert(),
            P::Random => Strategy::Random,
            P::None => {
                tracing::warn!("Rejected prefix preference {}", preference);
                return Err(SelectionError::UnsupportedPreference(preference));
            }
        };

        if strategy.requires_classification() && !self.has_classification() {
            tracing::debug!(
                "{} needs a variable classification, scoring will fail",
                preference
            );
        }

        Ok(Scorer::new(preference, strategy, self))
    }

    /// Is a variable classification available?
    pub fn has_classification(&self) -> bool {
        self.classification.is_some()
    }

    pub(crate) fn classification(&self) -> Option<&dyn VariableClassification> {
        self.classification.as_deref()
    }

    pub(crate) fn loop_structure(&self) -> Option<&dyn LoopStructure> {
        self.loop_structure.as_deref()
    }

    pub(crate) fn random(&self) -> &RandomScorer {
        &self.random
    }
}
