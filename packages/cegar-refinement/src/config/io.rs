//! Configuration I/O (YAML loading)
//!
//! Defines YAML schema types. Loading and export live in
//! selection_config.rs.

use serde::{Deserialize, Serialize};

use crate::features::prefix_selection::domain::PrefixPreference;

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Base preset
    #[serde(default = "default_preset_name")]
    pub preset: String,

    /// Fine-grained overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<SelectionOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_preference: Option<Vec<PrefixPreference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

fn default_preset_name() -> String {
    "none".to_string()
}
