//! Preset configurations
//!
//! Presets name the preference lists that are commonly combined.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::prefix_selection::domain::PrefixPreference;

/// Preference list preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPreset {
    /// Prefix selection disabled (`[NONE]`)
    None,

    /// Cheap variable domains, then short prefixes
    DomainGoodShort,

    /// Cheap variable domains, then long prefixes
    DomainGoodLong,

    /// Expensive variable domains, then short prefixes
    DomainBadShort,

    /// Expensive variable domains, then long prefixes
    DomainBadLong,

    /// Cheap variable domains, then narrow interpolation sequences, then
    /// short prefixes
    DomainGoodWidthNarrowShort,
}

impl SelectionPreset {
    /// Every preset
    pub const ALL: [SelectionPreset; 6] = [
        Self::None,
        Self::DomainGoodShort,
        Self::DomainGoodLong,
        Self::DomainBadShort,
        Self::DomainBadLong,
        Self::DomainGoodWidthNarrowShort,
    ];

    /// Preference list of this preset
    pub fn preferences(&self) -> Vec<PrefixPreference> {
        use PrefixPreference as P;

        match self {
            Self::None => vec![P::None],
            Self::DomainGoodShort => vec![P::DomainMin, P::LengthMin],
            Self::DomainGoodLong => vec![P::DomainMin, P::LengthMax],
            Self::DomainBadShort => vec![P::DomainMax, P::LengthMin],
            Self::DomainBadLong => vec![P::DomainMax, P::LengthMax],
            Self::DomainGoodWidthNarrowShort => vec![P::DomainMin, P::WidthMin, P::LengthMin],
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DomainGoodShort => "domain_good_short",
            Self::DomainGoodLong => "domain_good_long",
            Self::DomainBadShort => "domain_bad_short",
            Self::DomainBadLong => "domain_bad_long",
            Self::DomainGoodWidthNarrowShort => "domain_good_width_narrow_short",
        }
    }
}

impl Default for SelectionPreset {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for SelectionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
