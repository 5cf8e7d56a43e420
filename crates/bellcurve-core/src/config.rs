//! Configuration for the explorer
//!
//! Initial parameter values, slider ranges and the sigma policy. Loaded
//! from JSON, or from TOML when the `toml-config` feature is enabled:
//!
//! ```toml
//! initial_mean = 0.0
//! initial_sigma = 1.0
//! sigma_policy = "clamp"
//!
//! [mean_range]
//! min = -3.0
//! max = 3.0
//! step = 0.1
//!
//! [sigma_range]
//! min = 0.1
//! max = 3.0
//! step = 0.1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::{ParameterRange, SigmaPolicy, MIN_SIGMA};

/// Explorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Mean shown on startup and after a reset
    pub initial_mean: f64,
    /// Sigma shown on startup and after a reset
    pub initial_sigma: f64,
    /// Handling of non-positive sigma input
    pub sigma_policy: SigmaPolicy,
    /// Mean slider bounds and step
    pub mean_range: ParameterRange,
    /// Sigma slider bounds and step
    pub sigma_range: ParameterRange,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial_mean: 0.0,
            initial_sigma: 1.0,
            sigma_policy: SigmaPolicy::Reject,
            mean_range: ParameterRange::mean_default(),
            sigma_range: ParameterRange::sigma_default(),
        }
    }
}

impl ExplorerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and validate a TOML config file
    #[cfg(feature = "toml-config")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mean_range.validate("mean")?;
        self.sigma_range.validate("sigma")?;

        if self.sigma_range.min < MIN_SIGMA {
            return Err(ConfigError::NonPositiveSigma {
                min: self.sigma_range.min,
            });
        }

        check_initial("mean", self.initial_mean, &self.mean_range)?;
        check_initial("sigma", self.initial_sigma, &self.sigma_range)?;

        Ok(())
    }
}

fn check_initial(name: &str, value: f64, range: &ParameterRange) -> Result<(), ConfigError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name: name.to_string(),
            value,
            min: range.min,
            max: range.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_mean, 0.0);
        assert_eq!(config.initial_sigma, 1.0);
    }

    #[test]
    fn test_invalid_sigma_range() {
        let config = ExplorerConfig {
            sigma_range: ParameterRange::new(0.0, 3.0, 0.1),
            ..ExplorerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSigma { .. })
        ));
    }

    #[test]
    fn test_initial_out_of_range() {
        let config = ExplorerConfig {
            initial_mean: 4.0,
            ..ExplorerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_inverted_range() {
        let config = ExplorerConfig {
            mean_range: ParameterRange::new(3.0, -3.0, 0.1),
            ..ExplorerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_json_serialization() {
        let config = ExplorerConfig {
            initial_mean: 1.5,
            sigma_policy: SigmaPolicy::Clamp,
            ..ExplorerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"clamp\""));

        let parsed = ExplorerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_is_validated() {
        assert!(matches!(
            ExplorerConfig::from_json(r#"{"initial_mean": 7.0}"#),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            ExplorerConfig::from_json(r#"{"sigma_range": {"min": 0.0, "max": 3.0, "step": 0.1}}"#),
            Err(ConfigError::NonPositiveSigma { .. })
        ));
        assert!(matches!(
            ExplorerConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = ExplorerConfig::from_json(r#"{"initial_sigma": 2.0}"#).unwrap();
        assert_eq!(parsed.initial_sigma, 2.0);
        assert_eq!(parsed.mean_range, ParameterRange::mean_default());
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_toml_roundtrip() {
        let toml_str = r#"
            initial_mean = -1.0
            sigma_policy = "clamp"

            [sigma_range]
            min = 0.2
            max = 2.0
            step = 0.2
        "#;
        let config = ExplorerConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.initial_mean, -1.0);
        assert_eq!(config.sigma_range.step, 0.2);
        assert!(config.validate().is_ok());

        let back = ExplorerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_toml_is_validated() {
        assert!(matches!(
            ExplorerConfig::from_toml("initial_sigma = 5.0"),
            Err(ConfigError::OutOfRange { .. })
        ));
    }
}
