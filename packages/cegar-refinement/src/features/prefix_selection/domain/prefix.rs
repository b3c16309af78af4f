//! Infeasible prefix observations

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A candidate infeasible prefix, as seen by the scorers.
///
/// The slicing stage owns the real representation; the selector only reads
/// these four observations and never mutates a prefix.
pub trait InfeasiblePrefix {
    /// Number of steps in the full prefix
    fn path_length(&self) -> usize;

    /// Number of decision-relevant steps (at most `path_length`)
    fn nontrivial_length(&self) -> usize;

    /// Distance from the prefix start to the state where infeasibility is
    /// first localized
    fn pivot_depth(&self) -> usize;

    /// Variable names mentioned anywhere in the prefix
    fn referenced_identifiers(&self) -> &BTreeSet<String>;
}

impl<T: InfeasiblePrefix + ?Sized> InfeasiblePrefix for &T {
    fn path_length(&self) -> usize {
        (**self).path_length()
    }

    fn nontrivial_length(&self) -> usize {
        (**self).nontrivial_length()
    }

    fn pivot_depth(&self) -> usize {
        (**self).pivot_depth()
    }

    fn referenced_identifiers(&self) -> &BTreeSet<String> {
        (**self).referenced_identifiers()
    }
}

/// Precomputed observations of one infeasible prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixSummary {
    pub path_length: usize,
    pub nontrivial_length: usize,
    pub pivot_depth: usize,
    #[serde(default)]
    pub identifiers: BTreeSet<String>,
}

impl PrefixSummary {
    /// Create a summary without referenced identifiers
    pub fn new(path_length: usize, nontrivial_length: usize, pivot_depth: usize) -> Self {
        Self {
            path_length,
            nontrivial_length,
            pivot_depth,
            identifiers: BTreeSet::new(),
        }
    }

    /// Builder: Set referenced identifiers
    pub fn with_identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Capture the observations of any prefix
    pub fn of<P: InfeasiblePrefix + ?Sized>(prefix: &P) -> Self {
        Self {
            path_length: prefix.path_length(),
            nontrivial_length: prefix.nontrivial_length(),
            pivot_depth: prefix.pivot_depth(),
            identifiers: prefix.referenced_identifiers().clone(),
        }
    }
}

impl InfeasiblePrefix for PrefixSummary {
    fn path_length(&self) -> usize {
        self.path_length
    }

    fn nontrivial_length(&self) -> usize {
        self.nontrivial_length
    }

    fn pivot_depth(&self) -> usize {
        self.pivot_depth
    }

    fn referenced_identifiers(&self) -> &BTreeSet<String> {
        &self.identifiers
    }
}
