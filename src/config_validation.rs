use crate::config::CourseConfig;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    message: String,
}

impl ConfigValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Persistence-side sanity checks. Degenerate but well-formed values
/// (zero hours, no class days) are legal — the generator answers those
/// with an empty schedule. Rejected here are values that could not have
/// come from a sane snapshot at all.
pub fn validate_config(config: &CourseConfig) -> Result<(), ConfigValidationError> {
    if !config.total_hours.is_finite() {
        return Err(ConfigValidationError::new(format!(
            "total_hours must be finite (got {})",
            config.total_hours
        )));
    }
    if !config.hours_per_session.is_finite() {
        return Err(ConfigValidationError::new(format!(
            "hours_per_session must be finite (got {})",
            config.hours_per_session
        )));
    }
    if config.hours_per_session < 0.0 {
        return Err(ConfigValidationError::new(format!(
            "hours_per_session must not be negative (got {})",
            config.hours_per_session
        )));
    }
    Ok(())
}
