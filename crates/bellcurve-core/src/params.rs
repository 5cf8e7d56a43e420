//! Distribution parameters and the slider-backed parameter state.
//!
//! [`DistributionParameters`] is the validated `(mean, sigma)` pair every
//! sampling function takes. [`ParameterState`] is the single mutable cell a
//! front-end updates on user input; it keeps values inside their slider
//! ranges and recomputes the chart on request.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chart::ChartModel;
use crate::config::ExplorerConfig;
use crate::error::{ConfigError, Result, SamplerError};
use crate::grid::round_to;

/// Smallest accepted sigma; the clamp policy raises smaller values to it.
///
/// Keeps the peak density (and so the y axis) bounded: at this sigma the
/// peak is about 399.
pub const MIN_SIGMA: f64 = 1e-3;

/// What to do with a sigma that is not strictly positive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigmaPolicy {
    /// Refuse the value with [`SamplerError::InvalidSigma`]
    #[default]
    Reject,
    /// Replace it with the smallest allowed positive value
    Clamp,
}

/// Mean and standard deviation of a normal distribution.
///
/// Deserialization goes through [`DistributionParameters::new`], so a
/// decoded value holds the same invariants as a constructed one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct DistributionParameters {
    mean: f64,
    sigma: f64,
}

#[derive(Deserialize)]
struct RawParameters {
    mean: f64,
    sigma: f64,
}

impl TryFrom<RawParameters> for DistributionParameters {
    type Error = SamplerError;

    fn try_from(raw: RawParameters) -> Result<Self> {
        Self::new(raw.mean, raw.sigma)
    }
}

impl DistributionParameters {
    /// Validate and build a parameter pair.
    ///
    /// Sigma must be finite and at least [`MIN_SIGMA`].
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(SamplerError::NonFiniteMean { mean });
        }
        if !sigma.is_finite() || sigma < MIN_SIGMA {
            return Err(SamplerError::InvalidSigma { sigma });
        }
        Ok(Self { mean, sigma })
    }

    /// Build a parameter pair, handling sigma below [`MIN_SIGMA`] per
    /// `policy`.
    ///
    /// Non-finite values are rejected under either policy.
    pub fn with_policy(mean: f64, sigma: f64, policy: SigmaPolicy) -> Result<Self> {
        match policy {
            SigmaPolicy::Reject => Self::new(mean, sigma),
            SigmaPolicy::Clamp if sigma.is_finite() && sigma < MIN_SIGMA => {
                warn!(sigma, clamped = MIN_SIGMA, "clamping sigma");
                Self::new(mean, MIN_SIGMA)
            }
            SigmaPolicy::Clamp => Self::new(mean, sigma),
        }
    }

    /// The standard normal, `N(0, 1)`
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            sigma: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Density of this distribution at `x`
    pub fn density(&self, x: f64) -> f64 {
        crate::density::density(x, self.mean, self.sigma)
    }

    /// Density at the mean
    pub fn peak_density(&self) -> f64 {
        crate::density::peak_density(self.sigma)
    }
}

impl Default for DistributionParameters {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bounds and step of a slider-controlled parameter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Range of the mean slider: [-3, 3] in steps of 0.1
    pub fn mean_default() -> Self {
        Self::new(-3.0, 3.0, 0.1)
    }

    /// Range of the sigma slider: [0.1, 3] in steps of 0.1
    pub fn sigma_default() -> Self {
        Self::new(0.1, 3.0, 0.1)
    }

    /// Check that the range is usable
    pub fn validate(&self, name: &str) -> std::result::Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep {
                name: name.to_string(),
                step: self.step,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into the range and snap onto the step grid anchored at `min`
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = round_to(self.min + steps * self.step, self.decimals());
        snapped.clamp(self.min, self.max)
    }

    /// Fraction of the way from `min` to `max`, in [0, 1]
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Decimal places needed to represent the step exactly
    pub fn decimals(&self) -> i32 {
        let mut decimals = 0;
        while decimals < 9 {
            let scaled = self.step * 10.0_f64.powi(decimals);
            if (scaled - scaled.round()).abs() < 1e-9 {
                break;
            }
            decimals += 1;
        }
        decimals
    }
}

/// Which of the two parameters an update targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parameter {
    Mean,
    Sigma,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Mean => "mean",
            Parameter::Sigma => "sigma",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Mean => "Mean",
            Parameter::Sigma => "Sigma",
        }
    }

    /// The other parameter
    pub fn toggle(&self) -> Self {
        match self {
            Parameter::Mean => Parameter::Sigma,
            Parameter::Sigma => Parameter::Mean,
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The current parameter pair plus the slider ranges that bound it
#[derive(Clone, Debug)]
pub struct ParameterState {
    current: DistributionParameters,
    initial: DistributionParameters,
    mean_range: ParameterRange,
    sigma_range: ParameterRange,
    sigma_policy: SigmaPolicy,
}

impl ParameterState {
    /// Build the state from a validated configuration
    pub fn from_config(config: &ExplorerConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let initial = DistributionParameters::new(
            config.mean_range.snap(config.initial_mean),
            config.sigma_range.snap(config.initial_sigma),
        )
        .map_err(|_| ConfigError::NonPositiveSigma {
            min: config.sigma_range.min,
        })?;

        Ok(Self {
            current: initial,
            initial,
            mean_range: config.mean_range,
            sigma_range: config.sigma_range,
            sigma_policy: config.sigma_policy,
        })
    }

    pub fn params(&self) -> DistributionParameters {
        self.current
    }

    pub fn mean(&self) -> f64 {
        self.current.mean
    }

    pub fn sigma(&self) -> f64 {
        self.current.sigma
    }

    pub fn range(&self, parameter: Parameter) -> ParameterRange {
        match parameter {
            Parameter::Mean => self.mean_range,
            Parameter::Sigma => self.sigma_range,
        }
    }

    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Mean => self.current.mean,
            Parameter::Sigma => self.current.sigma,
        }
    }

    /// Set the mean, clamped to its range and snapped to the slider step
    pub fn set_mean(&mut self, mean: f64) -> Result<f64> {
        if !mean.is_finite() {
            return Err(SamplerError::NonFiniteMean { mean });
        }
        let snapped = self.mean_range.snap(mean);
        if !self.mean_range.contains(mean) {
            warn!(requested = mean, applied = snapped, "mean outside slider range");
        }
        self.current = DistributionParameters::new(snapped, self.current.sigma)?;
        Ok(snapped)
    }

    /// Set sigma, clamped to its range and snapped to the slider step.
    ///
    /// Input below [`MIN_SIGMA`] is first handled according to the
    /// configured [`SigmaPolicy`]; a clamped value then lands on the
    /// slider minimum.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<f64> {
        let requested =
            DistributionParameters::with_policy(self.current.mean, sigma, self.sigma_policy)?.sigma;
        let snapped = self.sigma_range.snap(requested);
        if !self.sigma_range.contains(requested) {
            warn!(requested, applied = snapped, "sigma outside slider range");
        }
        self.current = DistributionParameters::new(self.current.mean, snapped)?;
        Ok(snapped)
    }

    /// Set either parameter
    pub fn set(&mut self, parameter: Parameter, value: f64) -> Result<f64> {
        match parameter {
            Parameter::Mean => self.set_mean(value),
            Parameter::Sigma => self.set_sigma(value),
        }
    }

    /// Move a parameter by `steps` slider increments (negative moves down)
    pub fn step(&mut self, parameter: Parameter, steps: i32) -> Result<f64> {
        let range = self.range(parameter);
        let target = self.value(parameter) + range.step * steps as f64;
        self.set(parameter, range.snap(target))
    }

    pub fn step_mean(&mut self, steps: i32) -> Result<f64> {
        self.step(Parameter::Mean, steps)
    }

    pub fn step_sigma(&mut self, steps: i32) -> Result<f64> {
        self.step(Parameter::Sigma, steps)
    }

    /// Return to the configured initial values
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Recompute everything the chart needs from the current parameters
    pub fn chart(&self) -> ChartModel {
        debug!(
            mean = self.current.mean,
            sigma = self.current.sigma,
            "recomputing chart"
        );
        ChartModel::from_params(self.current)
    }
}

impl Default for ParameterState {
    fn default() -> Self {
        let config = ExplorerConfig::default();
        let initial = DistributionParameters::standard();
        Self {
            current: initial,
            initial,
            mean_range: config.mean_range,
            sigma_range: config.sigma_range,
            sigma_policy: config.sigma_policy,
        }
    }
}
