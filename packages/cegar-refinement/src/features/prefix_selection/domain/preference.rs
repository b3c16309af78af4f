//! Prefix preferences
//!
//! A preference names one scoring heuristic together with its orientation.
//! In a list of preferences the first entry is the primary sort key and
//! later entries only break ties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Heuristic used to rank infeasible prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrefixPreference {
    /// Shortest prefix first
    LengthMin,
    /// Longest prefix first
    LengthMax,

    /// Best domain-type score of the referenced variables first
    DomainMin,
    /// Worst domain-type score first
    DomainMax,

    /// Prefixes without loop-counter variables first
    LoopsMin,
    /// Prefixes with loop-counter variables first
    LoopsMax,

    /// Shallowest pivot state first
    PivotMin,
    /// Deepest pivot state first
    PivotMax,

    /// Narrowest interpolation sequence first
    WidthMin,
    /// Widest interpolation sequence first
    WidthMax,

    /// Fewest assignments to referenced variables first
    AssignmentsMin,
    /// Most assignments to referenced variables first
    AssignmentsMax,

    /// Fewest assumptions over referenced variables first
    AssumptionsMin,
    /// Most assumptions over referenced variables first
    AssumptionsMax,

    /// Pseudo-random (reproducible) order
    Random,

    /// Do not select at all. Configuration marker only, never scored.
    None,
}

/// The preference list that disables prefix-based selection.
///
/// Only meant as a configuration value; passing it to the selector fails.
pub const NO_SELECTION: &[PrefixPreference] = &[PrefixPreference::None];

impl PrefixPreference {
    /// Every preference, in declaration order
    pub const ALL: [PrefixPreference; 16] = [
        Self::LengthMin,
        Self::LengthMax,
        Self::DomainMin,
        Self::DomainMax,
        Self::LoopsMin,
        Self::LoopsMax,
        Self::PivotMin,
        Self::PivotMax,
        Self::WidthMin,
        Self::WidthMax,
        Self::AssignmentsMin,
        Self::AssignmentsMax,
        Self::AssumptionsMin,
        Self::AssumptionsMax,
        Self::Random,
        Self::None,
    ];

    /// Configuration name (e.g., "LENGTH_MIN")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LengthMin => "LENGTH_MIN",
            Self::LengthMax => "LENGTH_MAX",
            Self::DomainMin => "DOMAIN_MIN",
            Self::DomainMax => "DOMAIN_MAX",
            Self::LoopsMin => "LOOPS_MIN",
            Self::LoopsMax => "LOOPS_MAX",
            Self::PivotMin => "PIVOT_MIN",
            Self::PivotMax => "PIVOT_MAX",
            Self::WidthMin => "WIDTH_MIN",
            Self::WidthMax => "WIDTH_MAX",
            Self::AssignmentsMin => "ASSIGNMENTS_MIN",
            Self::AssignmentsMax => "ASSIGNMENTS_MAX",
            Self::AssumptionsMin => "ASSUMPTIONS_MIN",
            Self::AssumptionsMax => "ASSUMPTIONS_MAX",
            Self::Random => "RANDOM",
            Self::None => "NONE",
        }
    }

    /// Is this the inverted (prefer maximum) form of a heuristic?
    pub fn is_max(&self) -> bool {
        matches!(
            self,
            Self::LengthMax
                | Self::DomainMax
                | Self::LoopsMax
                | Self::PivotMax
                | Self::WidthMax
                | Self::AssignmentsMax
                | Self::AssumptionsMax
        )
    }

    /// Does scoring under this preference consult the variable classification?
    pub fn requires_classification(&self) -> bool {
        matches!(
            self,
            Self::DomainMin
                | Self::DomainMax
                | Self::LoopsMin
                | Self::LoopsMax
                | Self::AssignmentsMin
                | Self::AssignmentsMax
                | Self::AssumptionsMin
                | Self::AssumptionsMax
        )
    }
}

impl fmt::Display for PrefixPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown preference name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown prefix preference '{input}'")]
pub struct ParsePreferenceError {
    pub input: String,
}

impl FromStr for PrefixPreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParsePreferenceError {
                input: s.trim().to_string(),
            })
    }
}

/// Parse a comma-separated preference list such as `"DOMAIN_MIN, LENGTH_MAX"`.
///
/// Blank input yields an empty list; list-level rules (non-empty, `NONE`
/// alone) are checked by the configuration layer.
pub fn parse_preference_list(s: &str) -> Result<Vec<PrefixPreference>, ParsePreferenceError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(PrefixPreference::from_str).collect()
}
