//! Prefix Selection Ports - Interface Layer (Hexagonal Architecture)
//!
//! Services consumed from the variable/loop analysis stage. Both are
//! optional for a selector: an analysis run may have neither.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::features::prefix_selection::domain::Score;

// ═══════════════════════════════════════════════════════════════════════════
// Loop Structure Port
// ═══════════════════════════════════════════════════════════════════════════

/// Loop structure of the analyzed program.
///
/// Opaque to the selector: it is only handed through to
/// [`VariableClassification::domain_type_score`].
pub trait LoopStructure: Debug + Send + Sync {
    /// Number of loops in the program
    fn loop_count(&self) -> usize;

    /// Is the variable incremented or decremented inside some loop?
    fn is_loop_counter(&self, identifier: &str) -> bool;
}

// ═══════════════════════════════════════════════════════════════════════════
// Variable Classification Port
// ═══════════════════════════════════════════════════════════════════════════

/// Read-only classification of program variables by type and role
///
/// # Implementors
/// - the variable-domain classifier of the analysis front end
pub trait VariableClassification: Debug + Send + Sync {
    /// Weight of the domain types of `identifiers`.
    ///
    /// Lower is cheaper to refine. May return [`SENTINEL`] when the set is
    /// not meaningfully scoreable (e.g. it contains a loop counter).
    ///
    /// [`SENTINEL`]: crate::features::prefix_selection::domain::SENTINEL
    fn domain_type_score(
        &self,
        identifiers: &BTreeSet<String>,
        loop_structure: Option<&dyn LoopStructure>,
    ) -> Score;

    /// Number of assignments to `identifier` in the program
    fn assigned_occurrence_count(&self, identifier: &str) -> Score;

    /// Number of assumptions (branch conditions) over `identifier`
    fn assumed_occurrence_count(&self, identifier: &str) -> Score;
}
