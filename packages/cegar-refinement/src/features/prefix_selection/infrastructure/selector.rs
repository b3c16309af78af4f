//! Prefix Selector (main entry point)
//!
//! Algorithm:
//! 1. Build one scorer per preference, in list order (rejects `NONE` before
//!    any prefix is looked at)
//! 2. Score every candidate under every scorer, candidates in input order
//! 3. Compare the score tuples lexicographically, keep the first minimum
//!
//! Cost: `O(|preferences| * |candidates|)` score evaluations, no allocation
//! beyond one key per candidate.

use std::sync::Arc;

use super::factory::ScorerFactory;
use super::scorer::{Scorer, DEFAULT_RANDOM_SEED};
use crate::features::prefix_selection::domain::{
    InfeasiblePrefix, PrefixPreference, Score, SENTINEL,
};
use crate::features::prefix_selection::error::{SelectionError, SelectionResult};
use crate::features::prefix_selection::ports::{LoopStructure, VariableClassification};

/// Selects the infeasible prefix to refine with
///
/// Built once per refinement configuration and reused across CEGAR rounds.
/// The RANDOM heuristic keeps advancing the same stream for the lifetime of
/// the selector; runs that need reproducible draws use their own selector.
#[derive(Debug)]
pub struct PrefixSelector {
    factory: ScorerFactory,
}

impl PrefixSelector {
    /// Create a selector over an optional classification and loop structure
    pub fn new(
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
    ) -> Self {
        Self::with_random_seed(classification, loop_structure, DEFAULT_RANDOM_SEED)
    }

    /// Create a selector whose RANDOM heuristic starts from `seed`
    pub fn with_random_seed(
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
        seed: u64,
    ) -> Self {
        tracing::debug!(
            "prefix_selector_initialized (classification={}, loop_structure={}, seed={})",
            classification.is_some(),
            loop_structure.is_some(),
            seed
        );

        Self {
            factory: ScorerFactory::with_seed(classification, loop_structure, seed),
        }
    }

    /// Scorer factory owned by this selector
    pub fn factory(&self) -> &ScorerFactory {
        &self.factory
    }

    /// Pick the best prefix under `preferences`.
    ///
    /// The first preference is the primary key, later ones break ties; a tie
    /// on every key goes to the earliest candidate. Classification-dependent
    /// preferences fail with [`SelectionError::MissingClassification`] when
    /// the selector has no classification.
    pub fn select_best<'c, P: InfeasiblePrefix>(
        &self,
        preferences: &[PrefixPreference],
        candidates: &'c [P],
    ) -> SelectionResult<&'c P> {
        let index = self.select_best_index(preferences, candidates)?;
        Ok(&candidates[index])
    }

    /// Index form of [`select_best`](Self::select_best)
    pub fn select_best_index<P: InfeasiblePrefix>(
        &self,
        preferences: &[PrefixPreference],
        candidates: &[P],
    ) -> SelectionResult<usize> {
        let scorers = self.scorers(preferences)?;

        if candidates.is_empty() {
            return Err(SelectionError::EmptyCandidates);
        }

        let mut best: Option<(usize, Vec<Score>)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let key = scorers
                .iter()
                .map(|scorer| scorer.score(candidate))
                .collect::<SelectionResult<Vec<_>>>()?;

            tracing::trace!("Prefix candidate {} scored {:?}", index, key);

            // Strictly smaller keys only: the earliest candidate keeps a tie.
            let improves = match &best {
                Some((_, best_key)) => key < *best_key,
                None => true,
            };
            if improves {
                best = Some((index, key));
            }
        }

        let (index, key) = best.ok_or(SelectionError::EmptyCandidates)?;
        tracing::debug!(
            "Selected prefix {} of {} (preferences={:?}, key={:?})",
            index,
            candidates.len(),
            preferences,
            key
        );
        Ok(index)
    }

    /// Best-case score of `candidates` under one preference.
    ///
    /// Without a classification this is [`SENTINEL`] for every preference and
    /// every candidate set. Otherwise it is the minimum score, or
    /// [`SENTINEL`] for an empty set.
    pub fn aggregate_score<P: InfeasiblePrefix>(
        &self,
        candidates: &[P],
        preference: PrefixPreference,
    ) -> SelectionResult<Score> {
        if !self.factory.has_classification() {
            tracing::debug!(
                "No variable classification, aggregate score for {} is unknown",
                preference
            );
            return Ok(SENTINEL);
        }

        let scorer = self.factory.make_scorer(preference)?;
        let score = candidates
            .iter()
            .map(|candidate| scorer.score(candidate))
            .try_fold(SENTINEL, |best, score| score.map(|s| best.min(s)))?;

        tracing::debug!(
            "Aggregate score for {} over {} prefixes: {}",
            preference,
            candidates.len(),
            score
        );
        Ok(score)
    }

    fn scorers(&self, preferences: &[PrefixPreference]) -> SelectionResult<Vec<Scorer<'_>>> {
        preferences
            .iter()
            .map(|preference| self.factory.make_scorer(*preference))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prefix_selection::domain::PrefixSummary;
    use std::collections::BTreeSet;

    #[derive(Debug)]
    struct FixedClassification(Score);

    impl VariableClassification for FixedClassification {
        fn domain_type_score(
            &self,
            identifiers: &BTreeSet<String>,
            _loop_structure: Option<&dyn LoopStructure>,
        ) -> Score {
            self.0 * identifiers.len() as Score
        }

        fn assigned_occurrence_count(&self, _identifier: &str) -> Score {
            1
        }

        fn assumed_occurrence_count(&self, _identifier: &str) -> Score {
            2
        }
    }

    fn with_classification() -> PrefixSelector {
        PrefixSelector::new(Some(Arc::new(FixedClassification(3))), None)
    }

    #[test]
    fn test_select_by_length() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![
            PrefixSummary::new(5, 5, 2),
            PrefixSummary::new(3, 3, 4),
            PrefixSummary::new(7, 1, 1),
        ];
        let best = selector
            .select_best(&[PrefixPreference::LengthMin], &candidates)
            .unwrap();
        assert_eq!(best.path_length, 3);
        let longest = selector
            .select_best(&[PrefixPreference::LengthMax], &candidates)
            .unwrap();
        assert_eq!(longest.path_length, 7);
    }

    #[test]
    fn test_tie_breaking_keys() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![
            PrefixSummary::new(5, 0, 2),
            PrefixSummary::new(3, 0, 4),
            PrefixSummary::new(3, 0, 1),
        ];
        let index = selector
            .select_best_index(
                &[PrefixPreference::LengthMin, PrefixPreference::PivotMin],
                &candidates,
            )
            .unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![PrefixSummary::new(4, 2, 1); 3];
        let index = selector
            .select_best_index(&[PrefixPreference::WidthMin], &candidates)
            .unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_empty_preferences_select_first() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![PrefixSummary::new(9, 9, 9), PrefixSummary::new(1, 1, 1)];
        assert_eq!(selector.select_best_index(&[], &candidates).unwrap(), 0);
    }

    #[test]
    fn test_empty_candidates() {
        let selector = PrefixSelector::new(None, None);
        let candidates: Vec<PrefixSummary> = Vec::new();
        assert_eq!(
            selector
                .select_best(&[PrefixPreference::LengthMin], &candidates)
                .unwrap_err(),
            SelectionError::EmptyCandidates
        );
    }

    #[test]
    fn test_none_rejected_before_empty_check() {
        let selector = PrefixSelector::new(None, None);
        let candidates: Vec<PrefixSummary> = Vec::new();
        assert_eq!(
            selector
                .select_best(
                    &[PrefixPreference::LengthMin, PrefixPreference::None],
                    &candidates
                )
                .unwrap_err(),
            SelectionError::UnsupportedPreference(PrefixPreference::None)
        );
    }

    #[test]
    fn test_select_without_classification_fails() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![PrefixSummary::new(1, 1, 1)];
        assert_eq!(
            selector
                .select_best(&[PrefixPreference::DomainMin], &candidates)
                .unwrap_err(),
            SelectionError::MissingClassification(PrefixPreference::DomainMin)
        );
    }

    #[test]
    fn test_aggregate_without_classification() {
        let selector = PrefixSelector::new(None, None);
        let candidates = vec![PrefixSummary::new(1, 1, 1)];
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::LengthMin)
                .unwrap(),
            SENTINEL
        );
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::None)
                .unwrap(),
            SENTINEL
        );
    }

    #[test]
    fn test_aggregate_minimum() {
        let selector = with_classification();
        let candidates = vec![
            PrefixSummary::new(4, 1, 1).with_identifiers(["a", "b"]),
            PrefixSummary::new(8, 1, 1).with_identifiers(["a"]),
        ];
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::DomainMin)
                .unwrap(),
            3
        );
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::DomainMax)
                .unwrap(),
            -6
        );
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::AssumptionsMin)
                .unwrap(),
            2
        );
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::LengthMin)
                .unwrap(),
            4
        );
    }

    #[test]
    fn test_aggregate_empty_set() {
        let selector = with_classification();
        let candidates: Vec<PrefixSummary> = Vec::new();
        assert_eq!(
            selector
                .aggregate_score(&candidates, PrefixPreference::DomainMin)
                .unwrap(),
            SENTINEL
        );
    }

    #[test]
    fn test_aggregate_none_with_classification() {
        let selector = with_classification();
        let candidates = vec![PrefixSummary::new(1, 1, 1)];
        assert!(selector
            .aggregate_score(&candidates, PrefixPreference::None)
            .is_err());
    }

    #[test]
    fn test_selector_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrefixSelector>();
    }
}
