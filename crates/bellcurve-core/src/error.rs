//! Error types for bellcurve-core
//!
//! Two concerns can fail:
//! - Sampling, when the distribution parameters are degenerate
//! - Configuration, when a loaded config is malformed or inconsistent

use thiserror::Error;

/// Errors raised before any density is evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Sigma is below the 0.001 floor or not finite
    #[error("Invalid sigma: {sigma} (must be finite and >= 0.001)")]
    InvalidSigma { sigma: f64 },

    /// Mean is NaN or infinite
    #[error("Mean must be finite, got {mean}")]
    NonFiniteMean { mean: f64 },
}

/// Errors related to explorer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A range whose bounds are inverted or not finite
    #[error("Invalid range for {name}: [{min}, {max}]")]
    InvalidRange { name: String, min: f64, max: f64 },

    /// Slider step must be positive
    #[error("Step for {name} must be positive, got {step}")]
    InvalidStep { name: String, step: f64 },

    /// Initial value does not lie inside its slider range
    #[error("Initial {name} {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The sigma slider would allow a degenerate distribution
    #[error("Sigma range minimum must be at least 0.001, got {min}")]
    NonPositiveSigma { min: f64 },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// I/O errors while reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for sampler operations
pub type Result<T> = std::result::Result<T, SamplerError>;
