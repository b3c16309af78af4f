//! Prefix Selection Application Layer
//!
//! Use case bound to one validated configuration. This is what the CEGAR
//! refinement driver calls once per spurious counterexample.

use std::sync::Arc;

use crate::config::SelectionConfig;
use crate::errors::Result;
use crate::features::prefix_selection::domain::{InfeasiblePrefix, PrefixPreference, Score};
use crate::features::prefix_selection::infrastructure::PrefixSelector;
use crate::features::prefix_selection::ports::{LoopStructure, VariableClassification};

/// Prefix Selection UseCase Trait
///
/// Generic over the driver's prefix type, so a driver can hold it as
/// `Box<dyn PrefixSelectionUseCase<MyPrefix>>`.
pub trait PrefixSelectionUseCase<P: InfeasiblePrefix>: Send + Sync {
    /// Prefix to refine with, or `None` when the configuration disables
    /// prefix selection (the driver then keeps its default prefix).
    fn select_prefix<'c>(&self, candidates: &'c [P]) -> Result<Option<&'c P>>;

    /// Aggregate quality of a batch of prefixes under one preference
    fn refinement_quality(&self, candidates: &[P], preference: PrefixPreference) -> Result<Score>;
}

/// Prefix Selection UseCase Implementation
#[derive(Debug)]
pub struct PrefixSelectionUseCaseImpl {
    config: SelectionConfig,
    selector: PrefixSelector,
}

impl PrefixSelectionUseCaseImpl {
    /// Validate `config` and build the selector it describes
    pub fn new(
        config: SelectionConfig,
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
    ) -> Result<Self> {
        let selector = config.build_selector(classification, loop_structure)?;
        Ok(Self { config, selector })
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn selector(&self) -> &PrefixSelector {
        &self.selector
    }
}

impl<P: InfeasiblePrefix> PrefixSelectionUseCase<P> for PrefixSelectionUseCaseImpl {
    fn select_prefix<'c>(&self, candidates: &'c [P]) -> Result<Option<&'c P>> {
        if self.config.is_selection_disabled() {
            tracing::debug!("Prefix selection disabled, keeping default prefix");
            return Ok(None);
        }

        let best = self
            .selector
            .select_best(&self.config.prefix_preference, candidates)?;
        Ok(Some(best))
    }

    fn refinement_quality(&self, candidates: &[P], preference: PrefixPreference) -> Result<Score> {
        Ok(self.selector.aggregate_score(candidates, preference)?)
    }
}
