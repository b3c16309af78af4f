//! Prefix Selection Configuration
//!
//! Two tiers, as the rest of the refinement driver configures itself:
//! - Preset: named preference list (`domain_good_short`, ...)
//! - Override: builder calls or a versioned YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use cegar_refinement::config::{SelectionConfig, SelectionPreset};
//!
//! let config = SelectionConfig::from_preset(SelectionPreset::DomainGoodShort)
//!     .parse_prefix_preference("DOMAIN_MIN, PIVOT_MAX")?;
//! let selector = config.build_selector(classification, loop_structure)?;
//!
//! let config = SelectionConfig::from_yaml("refinement.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod selection_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{SelectionConfigExportV1, SelectionOverrides};
pub use preset::SelectionPreset;
pub use selection_config::SelectionConfig;
pub use validation::{ensure_valid, Validatable};
