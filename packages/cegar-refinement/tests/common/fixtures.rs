//! Test fixtures
//!
//! In-memory stand-ins for the classifier and loop analysis.

use cegar_refinement::features::prefix_selection::{
    LoopStructure, Score, VariableClassification, SENTINEL,
};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// Domain type of a classified variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    Boolean,
    IntEqual,
    Unknown,
}

impl DomainType {
    fn factor(self) -> Score {
        match self {
            DomainType::Boolean => 2,
            DomainType::IntEqual => 4,
            DomainType::Unknown => 16,
        }
    }
}

/// Classification backed by explicit tables.
///
/// Domain score: product of per-variable factors (boolean 2, int-equal 4,
/// anything else 16), 16 for an empty set, `SENTINEL` as soon as a loop
/// counter is referenced, `SENTINEL - 1` on overflow.
#[derive(Debug, Default)]
pub struct TableClassification {
    pub domains: HashMap<String, DomainType>,
    pub assigned: HashMap<String, Score>,
    pub assumed: HashMap<String, Score>,
}

impl TableClassification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, identifier: &str, domain: DomainType) -> Self {
        self.domains.insert(identifier.to_string(), domain);
        self
    }

    pub fn assigned(mut self, identifier: &str, count: Score) -> Self {
        self.assigned.insert(identifier.to_string(), count);
        self
    }

    pub fn assumed(mut self, identifier: &str, count: Score) -> Self {
        self.assumed.insert(identifier.to_string(), count);
        self
    }

    pub fn shared(self) -> Arc<dyn VariableClassification> {
        Arc::new(self)
    }
}

impl VariableClassification for TableClassification {
    fn domain_type_score(
        &self,
        identifiers: &BTreeSet<String>,
        loop_structure: Option<&dyn LoopStructure>,
    ) -> Score {
        if identifiers.is_empty() {
            return DomainType::Unknown.factor();
        }

        let mut score: Score = 1;
        for identifier in identifiers {
            if loop_structure.is_some_and(|loops| loops.is_loop_counter(identifier)) {
                return SENTINEL;
            }
            let factor = self
                .domains
                .get(identifier)
                .copied()
                .unwrap_or(DomainType::Unknown)
                .factor();
            score = match score.checked_mul(factor) {
                Some(s) => s,
                None => return SENTINEL - 1,
            };
        }
        score
    }

    fn assigned_occurrence_count(&self, identifier: &str) -> Score {
        self.assigned.get(identifier).copied().unwrap_or(0)
    }

    fn assumed_occurrence_count(&self, identifier: &str) -> Score {
        self.assumed.get(identifier).copied().unwrap_or(0)
    }
}

/// Classification returning one fixed domain score for every set
#[derive(Debug)]
pub struct ConstantClassification(pub Score);

impl VariableClassification for ConstantClassification {
    fn domain_type_score(
        &self,
        _identifiers: &BTreeSet<String>,
        _loop_structure: Option<&dyn LoopStructure>,
    ) -> Score {
        self.0
    }

    fn assigned_occurrence_count(&self, _identifier: &str) -> Score {
        0
    }

    fn assumed_occurrence_count(&self, _identifier: &str) -> Score {
        0
    }
}

/// Loop structure listing its loop counters
#[derive(Debug, Default)]
pub struct CounterLoops {
    pub loops: usize,
    pub counters: HashSet<String>,
}

impl CounterLoops {
    pub fn with_counters<I, S>(loops: usize, counters: I) -> Arc<dyn LoopStructure>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            loops,
            counters: counters.into_iter().map(Into::into).collect(),
        })
    }
}

impl LoopStructure for CounterLoops {
    fn loop_count(&self) -> usize {
        self.loops
    }

    fn is_loop_counter(&self, identifier: &str) -> bool {
        self.counters.contains(identifier)
    }
}
