//! Test data builders

use cegar_refinement::features::prefix_selection::PrefixSummary;

/// Builder for PrefixSummary
#[derive(Debug, Default)]
pub struct PrefixBuilder {
    length: usize,
    width: Option<usize>,
    pivot: usize,
    identifiers: Vec<String>,
}

impl PrefixBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Non-trivial length (defaults to the path length)
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn pivot(mut self, pivot: usize) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn ids(mut self, identifiers: &[&str]) -> Self {
        self.identifiers
            .extend(identifiers.iter().map(|id| id.to_string()));
        self
    }

    /// Build the final PrefixSummary
    pub fn build(self) -> PrefixSummary {
        PrefixSummary::new(self.length, self.width.unwrap_or(self.length), self.pivot)
            .with_identifiers(self.identifiers)
    }
}

/// Prefix with the given length and pivot depth
pub fn prefix(length: usize, pivot: usize) -> PrefixSummary {
    PrefixBuilder::new().length(length).pivot(pivot).build()
}
