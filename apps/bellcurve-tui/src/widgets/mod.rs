//! TUI widgets

mod density_chart;
mod slider;

pub use density_chart::DensityChart;
pub use slider::ParameterSlider;
