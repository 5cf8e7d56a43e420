//! Density series over the fixed plotting domain
//!
//! The domain is `[-4, 4]` sampled every `0.1`, giving 81 points. Each point
//! carries the density of the current distribution and of the standard
//! normal, so a renderer can draw both curves from one series.

use serde::{Deserialize, Serialize};

use crate::density::standard_density;
use crate::error::Result;
use crate::grid::closed_range;
use crate::params::DistributionParameters;

/// Left edge of the plotting domain
pub const DOMAIN_MIN: f64 = -4.0;

/// Right edge of the plotting domain
pub const DOMAIN_MAX: f64 = 4.0;

/// Spacing between samples
pub const SAMPLE_STEP: f64 = 0.1;

/// Number of samples in every series
pub const SERIES_LEN: usize = 81;

/// One sampled point of both curves
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Position, rounded to one decimal
    pub x: f64,
    /// Density of the current distribution at `x`
    pub density: f64,
    /// Density of the standard normal at `x`
    pub reference_density: f64,
}

/// Samples ordered by ascending `x`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<SamplePoint>,
}

impl Series {
    /// Sample the given distribution over the plotting domain
    pub fn from_params(params: DistributionParameters) -> Self {
        let points = closed_range(DOMAIN_MIN, DOMAIN_MAX, SAMPLE_STEP)
            .into_iter()
            .map(|x| SamplePoint {
                x,
                density: params.density(x),
                reference_density: standard_density(x),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.points.iter()
    }

    /// `(x, density)` pairs for the current curve
    pub fn density_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.density)).collect()
    }

    /// `(x, reference_density)` pairs for the standard normal curve
    pub fn reference_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.x, p.reference_density))
            .collect()
    }

    /// Sample with the largest current density
    pub fn peak(&self) -> Option<&SamplePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.density.total_cmp(&b.density))
    }

    /// Trapezoid-rule integral of the current density over the samples
    pub fn trapezoid_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].density + w[1].density) / 2.0)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Sample `N(mean, sigma)` and the standard normal over `[-4, 4]`.
///
/// Fails if `sigma` is not strictly positive or either value is not finite.
pub fn generate_series(mean: f64, sigma: f64) -> Result<Series> {
    let params = DistributionParameters::new(mean, sigma)?;
    Ok(Series::from_params(params))
}
