//! Configuration error taxonomy.
//!
//! Every fallible operation in the core fails at construction or setup time.
//! Stepping a built [`ParticleField`](crate::ParticleField) never fails.

use thiserror::Error;

/// Result alias for core constructors
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Invalid input detected while setting up an estimate or a particle field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Wind speed below zero would silently reverse the wind direction
    #[error("wind speed must be non-negative, got {value} km/h")]
    NegativeSpeed { value: f64 },

    /// NaN or infinite input
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    /// Finite-difference spacing that is zero, negative or not finite
    #[error("grid spacing {axis} must be finite and positive, got {value} m")]
    InvalidGridSpacing { axis: &'static str, value: f64 },

    /// Bounding box with min >= max (or non-finite bounds) on an axis
    #[error("domain {axis} range is empty or invalid: min {min}, max {max}")]
    InvalidDomain {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// Particle field requested with no particles
    #[error("particle count must be at least 1")]
    EmptyField,

    /// Turbulence intensity is a standard deviation
    #[error("turbulence intensity must be finite and non-negative, got {value}")]
    InvalidTurbulence { value: f64 },

    /// Scale from physical wind to per-frame map displacement
    #[error("speed scale must be finite and positive, got {value}")]
    InvalidSpeedScale { value: f64 },

    /// Text that does not parse as `speed,azimuth,elevation`
    #[error("invalid wind observation '{input}': {reason}")]
    InvalidObservation { input: String, reason: String },

    /// Malformed scenario document
    #[error("invalid scenario: {0}")]
    Scenario(String),
}

impl ConfigError {
    /// Reject NaN and infinities for a named parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] when `value` is not finite.
    pub fn ensure_finite(parameter: &'static str, value: f64) -> ConfigResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::NonFinite { parameter, value })
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Scenario(err.to_string())
    }
}
