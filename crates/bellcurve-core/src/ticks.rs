//! Axis tick marks for the density chart
//!
//! The x axis is fixed; the y axis grows with the taller of the two curves
//! so a narrow distribution is never clipped.

use serde::{Deserialize, Serialize};

use crate::density::standard_density;
use crate::error::Result;
use crate::grid::{closed_range, round_display};
use crate::params::DistributionParameters;
use crate::sampler::{DOMAIN_MAX, DOMAIN_MIN};

/// Spacing of x-axis ticks
pub const X_TICK_STEP: f64 = 0.5;

/// Spacing of y-axis ticks
pub const Y_TICK_STEP: f64 = 0.2;

/// Tick positions for both axes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickSet {
    /// `[-4, 4]` every 0.5
    pub x_ticks: Vec<f64>,
    /// `[0, y_max]` every 0.2
    pub y_ticks: Vec<f64>,
    /// Upper bound of the y axis: the taller peak rounded up to a tenth.
    /// May exceed the last entry of `y_ticks`.
    pub y_max: f64,
}

impl TickSet {
    pub fn from_params(params: DistributionParameters) -> Self {
        let y_max = y_axis_max(params);
        Self {
            x_ticks: closed_range(DOMAIN_MIN, DOMAIN_MAX, X_TICK_STEP),
            y_ticks: closed_range(0.0, y_max, Y_TICK_STEP),
            y_max,
        }
    }
}

/// The larger of the current peak and the standard normal peak
pub fn max_density(params: DistributionParameters) -> f64 {
    params
        .density(params.mean())
        .max(standard_density(0.0))
}

/// `ceil(max_density * 10) / 10`
pub fn y_axis_max(params: DistributionParameters) -> f64 {
    round_display((max_density(params) * 10.0).ceil() / 10.0)
}

/// Compute axis ticks for `N(mean, sigma)`.
///
/// Fails if `sigma` is not strictly positive or either value is not finite.
pub fn generate_ticks(mean: f64, sigma: f64) -> Result<TickSet> {
    let params = DistributionParameters::new(mean, sigma)?;
    Ok(TickSet::from_params(params))
}
