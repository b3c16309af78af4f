//! Prefix selection configuration
//!
//! Resolution order: preset → builder/YAML overrides → validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::error::{ConfigError, ConfigResult};
use super::io::{SelectionConfigExportV1, SelectionOverrides, SUPPORTED_VERSIONS};
use super::preset::SelectionPreset;
use super::validation::{ensure_valid, Validatable};
use crate::features::prefix_selection::domain::{
    parse_preference_list, PrefixPreference, NO_SELECTION,
};
use crate::features::prefix_selection::infrastructure::{PrefixSelector, DEFAULT_RANDOM_SEED};
use crate::features::prefix_selection::ports::{LoopStructure, VariableClassification};

/// Prefix selection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Preset the configuration started from
    pub preset: SelectionPreset,

    /// Ordered heuristics (first = primary key). `[NONE]` disables selection.
    pub prefix_preference: Vec<PrefixPreference>,

    /// Seed of the RANDOM heuristic
    pub random_seed: u64,
}

impl SelectionConfig {
    /// Create from preset
    pub fn from_preset(preset: SelectionPreset) -> Self {
        Self {
            preset,
            prefix_preference: preset.preferences(),
            random_seed: DEFAULT_RANDOM_SEED,
        }
    }

    /// Builder: Set prefix_preference
    pub fn prefix_preference(mut self, v: Vec<PrefixPreference>) -> Self {
        self.prefix_preference = v;
        self
    }

    /// Builder: Set prefix_preference from a comma-separated list
    pub fn parse_prefix_preference(mut self, s: &str) -> ConfigResult<Self> {
        self.prefix_preference = parse_preference_list(s)?;
        Ok(self)
    }

    /// Builder: Set random_seed
    pub fn random_seed(mut self, v: u64) -> Self {
        self.random_seed = v;
        self
    }

    /// Does this configuration turn prefix selection off?
    pub fn is_selection_disabled(&self) -> bool {
        self.prefix_preference.as_slice() == NO_SELECTION
    }

    /// Validate and build a selector over the given analysis results
    pub fn build_selector(
        &self,
        classification: Option<Arc<dyn VariableClassification>>,
        loop_structure: Option<Arc<dyn LoopStructure>>,
    ) -> ConfigResult<PrefixSelector> {
        ensure_valid(self)?;
        Ok(PrefixSelector::with_random_seed(
            classification,
            loop_structure,
            self.random_seed,
        ))
    }

    /// Load a validated configuration from a YAML file
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load a validated configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: SelectionConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::from_preset(SelectionPreset::from_str(&export.preset)?);

        if let Some(overrides) = export.overrides {
            if let Some(preferences) = overrides.prefix_preference {
                config.prefix_preference = preferences;
            }
            if let Some(seed) = overrides.random_seed {
                config.random_seed = seed;
            }
        }

        ensure_valid(&config)?;
        tracing::debug!(
            "Loaded prefix selection config (preset={}, preferences={:?})",
            config.preset,
            config.prefix_preference
        );
        Ok(config)
    }

    /// Export as YAML schema v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = SelectionConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(SelectionOverrides {
                prefix_preference: Some(self.prefix_preference.clone()),
                random_seed: Some(self.random_seed),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::from_preset(SelectionPreset::default())
    }
}

impl Validatable for SelectionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prefix_preference.is_empty() {
            return Err(ConfigError::EmptyPreferenceList);
        }

        let mixes_none = self.prefix_preference.len() > 1
            && self.prefix_preference.contains(&PrefixPreference::None);
        if mixes_none {
            return Err(ConfigError::NoneMixedWithHeuristics {
                preferences: self
                    .prefix_preference
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let mut seen = HashSet::new();
        for preference in &self.prefix_preference {
            if !seen.insert(*preference) {
                return Err(ConfigError::DuplicatePreference(*preference));
            }
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "SelectionConfig"
    }
}
