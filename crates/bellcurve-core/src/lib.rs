//! bellcurve-core - Normal distribution sampler for the bellcurve explorer
//!
//! Turns a `(mean, sigma)` pair into the data a chart needs to compare
//! `N(mean, sigma)` against the standard normal:
//!
//! - **Density**: the closed-form Gaussian PDF
//! - **Series**: 81 samples of both curves over `[-4, 4]`
//! - **Ticks**: fixed x ticks and y ticks that grow with the taller peak
//! - **ParameterState**: slider-bounded parameter cell that recomputes the
//!   chart on demand
//!
//! Everything is pure and synchronous; nothing derived from the parameters
//! is cached.
//!
//! ```
//! use bellcurve_core::{generate_series, generate_ticks};
//!
//! let series = generate_series(0.0, 1.0).unwrap();
//! assert_eq!(series.len(), 81);
//!
//! let ticks = generate_ticks(0.0, 1.0).unwrap();
//! assert_eq!(ticks.y_ticks, vec![0.0, 0.2, 0.4]);
//! ```

pub mod chart;
pub mod config;
pub mod density;
pub mod error;
pub mod grid;
pub mod params;
pub mod sampler;
pub mod ticks;

pub use chart::{ChartModel, MarkerKind, ReferenceMarker};
pub use config::ExplorerConfig;
pub use density::{density, peak_density, standard_density};
pub use error::{ConfigError, Result, SamplerError};
pub use params::{
    DistributionParameters, Parameter, ParameterRange, ParameterState, SigmaPolicy, MIN_SIGMA,
};
pub use sampler::{generate_series, SamplePoint, Series, SERIES_LEN};
pub use ticks::{generate_ticks, TickSet};
