//! Configuration error types

use thiserror::Error;

use crate::features::prefix_selection::domain::{ParsePreferenceError, PrefixPreference};

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No preference configured
    #[error("Prefix preference list is empty. Use NONE to disable prefix selection.")]
    EmptyPreferenceList,

    /// NONE combined with real heuristics
    #[error("NONE disables prefix selection and must be the only entry, found [{preferences}]")]
    NoneMixedWithHeuristics { preferences: String },

    /// Same preference listed twice
    #[error("Prefix preference {0} is listed more than once")]
    DuplicatePreference(PrefixPreference),

    /// Unknown preference name
    #[error("{0}. Valid preferences: {}", valid_preferences())]
    UnknownPreference(#[from] ParsePreferenceError),

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: none, domain_good_short, domain_good_long, domain_bad_short, domain_bad_long, domain_good_width_narrow_short")]
    UnknownPreset(String),

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

fn valid_preferences() -> String {
    PrefixPreference::ALL
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preference_lists_valid_names() {
        let err: ConfigError = ParsePreferenceError {
            input: "SHORTEST".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("SHORTEST"));
        assert!(msg.contains("LENGTH_MIN"));
        assert!(msg.contains("ASSUMPTIONS_MAX"));
    }

    #[test]
    fn test_unsupported_version_formatting() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported configuration version 3. Supported versions: 1"
        );
    }

    #[test]
    fn test_none_mixed_formatting() {
        let err = ConfigError::NoneMixedWithHeuristics {
            preferences: "NONE, LENGTH_MIN".to_string(),
        };
        assert!(err.to_string().contains("[NONE, LENGTH_MIN]"));
    }
}
