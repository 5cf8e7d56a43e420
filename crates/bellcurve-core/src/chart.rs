//! Everything a renderer needs to draw one frame of the explorer.

use serde::{Deserialize, Serialize};

use crate::density::STANDARD_MEAN;
use crate::params::DistributionParameters;
use crate::sampler::Series;
use crate::ticks::TickSet;

/// Which curve a reference marker belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Mean of the standard normal
    Standard,
    /// Mean of the user-controlled distribution
    Current,
}

/// A vertical reference line drawn at a mean
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMarker {
    pub kind: MarkerKind,
    pub x: f64,
    pub label: String,
}

impl ReferenceMarker {
    fn standard() -> Self {
        Self {
            kind: MarkerKind::Standard,
            x: STANDARD_MEAN,
            label: "μ=0".to_string(),
        }
    }

    fn current(mean: f64) -> Self {
        Self {
            kind: MarkerKind::Current,
            x: mean,
            label: format!("μ={:.2}", mean),
        }
    }
}

/// Series, ticks, markers and labels for one parameter pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub params: DistributionParameters,
    pub series: Series,
    pub ticks: TickSet,
    pub markers: Vec<ReferenceMarker>,
    pub mean_label: String,
    pub sigma_label: String,
}

impl ChartModel {
    pub fn from_params(params: DistributionParameters) -> Self {
        Self {
            params,
            series: Series::from_params(params),
            ticks: TickSet::from_params(params),
            markers: vec![
                ReferenceMarker::standard(),
                ReferenceMarker::current(params.mean()),
            ],
            mean_label: format!("Mean: {:.2}", params.mean()),
            sigma_label: format!("Sigma: {:.2}", params.sigma()),
        }
    }

    /// The marker for the given curve
    pub fn marker(&self, kind: MarkerKind) -> Option<&ReferenceMarker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    /// Serialize to JSON for an external renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
