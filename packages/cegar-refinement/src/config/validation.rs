//! Configuration validation
//!
//! Provides the validation trait implemented by configuration objects.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use cegar_refinement::config::Validatable;
///
/// fn build<C: Validatable>(config: C) -> Result<Selector, ConfigError> {
///     config.validate()?;
///     // ... build selector
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Validate `config`, logging a rejection under its name
pub fn ensure_valid<C: Validatable + ?Sized>(config: &C) -> ConfigResult<()> {
    config.validate().map_err(|err| {
        tracing::warn!("{} rejected: {}", config.config_name(), err);
        err
    })
}
