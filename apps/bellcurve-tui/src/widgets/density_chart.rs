//! Density chart: current curve, standard normal and mean markers.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use bellcurve_core::grid::round_display;
use bellcurve_core::sampler::{DOMAIN_MAX, DOMAIN_MIN};
use bellcurve_core::ticks::Y_TICK_STEP;
use bellcurve_core::{ChartModel, MarkerKind};

/// Matches the original widget's curve colour (#8884d8)
const CURVE_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);
const REFERENCE_COLOR: Color = Color::Green;

/// Renders a [`ChartModel`] with ratatui's line chart
pub struct DensityChart<'a> {
    model: &'a ChartModel,
}

impl<'a> DensityChart<'a> {
    pub fn new(model: &'a ChartModel) -> Self {
        Self { model }
    }

    /// Top of the y axis.
    ///
    /// Terminal axis labels are spread evenly between the bounds, so the
    /// axis ends on a tick; one extra tick is added when the last one sits
    /// below the peak.
    pub fn y_top(&self) -> f64 {
        let ticks = &self.model.ticks;
        let last = ticks.y_ticks.last().copied().unwrap_or(0.0);
        if last + 1e-9 >= ticks.y_max {
            last
        } else {
            round_display(last + Y_TICK_STEP)
        }
    }

    fn y_labels(&self, max_labels: usize) -> Vec<f64> {
        let mut values = self.model.ticks.y_ticks.clone();
        let top = self.y_top();
        if values.last().map_or(true, |&last| last + 1e-9 < top) {
            values.push(top);
        }
        thin_labels(&values, max_labels)
    }
}

/// Keep every k-th value so at most `max` remain and spacing stays even
pub fn thin_labels(values: &[f64], max: usize) -> Vec<f64> {
    let n = values.len();
    if n <= max.max(2) {
        return values.to_vec();
    }
    let gaps = n - 1;
    (2..=gaps)
        .find(|k| gaps % k == 0 && gaps / k + 1 <= max)
        .map(|k| values.iter().step_by(k).copied().collect())
        .unwrap_or_else(|| vec![values[0], values[gaps]])
}

fn format_tick(value: f64) -> Line<'static> {
    Line::from(format!("{:.1}", value))
}

impl Widget for DensityChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let y_top = self.y_top();

        let current = model.series.density_points();
        let reference = model.series.reference_points();
        let marker_lines: Vec<(MarkerKind, String, [(f64, f64); 2])> = model
            .markers
            .iter()
            .map(|m| (m.kind, m.label.clone(), [(m.x, 0.0), (m.x, y_top)]))
            .collect();

        let mut datasets = vec![
            Dataset::default()
                .name("N(0, 1)")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(REFERENCE_COLOR))
                .data(&reference),
            Dataset::default()
                .name(format!(
                    "N({:.2}, {:.2})",
                    model.params.mean(),
                    model.params.sigma()
                ))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(CURVE_COLOR))
                .data(&current),
        ];
        for (kind, label, points) in &marker_lines {
            let color = match kind {
                MarkerKind::Standard => Color::White,
                MarkerKind::Current => Color::Red,
            };
            datasets.push(
                Dataset::default()
                    .name(label.clone())
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color))
                    .data(points),
            );
        }

        // Roughly one label per six columns / two rows
        let x_labels = thin_labels(&model.ticks.x_ticks, (area.width / 6).max(2) as usize);
        let y_labels = self.y_labels((area.height / 2).max(2) as usize);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Normal distribution "),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .x_axis(
                Axis::default()
                    .title("x".dark_gray())
                    .bounds([DOMAIN_MIN, DOMAIN_MAX])
                    .labels(x_labels.into_iter().map(format_tick).collect::<Vec<_>>()),
            )
            .y_axis(
                Axis::default()
                    .title("density".dark_gray())
                    .bounds([0.0, y_top])
                    .labels(y_labels.into_iter().map(format_tick).collect::<Vec<_>>()),
            );

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellcurve_core::DistributionParameters;

    fn model(mean: f64, sigma: f64) -> ChartModel {
        ChartModel::from_params(DistributionParameters::new(mean, sigma).unwrap())
    }

    #[test]
    fn test_thin_labels_keeps_even_spacing() {
        let values: Vec<f64> = (0..17).map(|i| -4.0 + 0.5 * i as f64).collect();

        assert_eq!(thin_labels(&values, 20).len(), 17);
        assert_eq!(
            thin_labels(&values, 9),
            vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(thin_labels(&values, 5), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(thin_labels(&values, 2), vec![-4.0, 4.0]);
    }

    #[test]
    fn test_y_top_ends_on_tick() {
        assert_eq!(DensityChart::new(&model(0.0, 1.0)).y_top(), 0.4);
        assert_eq!(DensityChart::new(&model(0.0, 0.5)).y_top(), 0.8);

        // y_max is 0.5 but ticks stop at 0.4
        let wide = model(0.0, 0.9);
        let top = DensityChart::new(&wide).y_top();
        assert!((top - 0.6).abs() < 1e-9);
        assert!(top >= wide.ticks.y_max);
    }

    #[test]
    fn test_render_shows_legend_and_labels() {
        let model = model(1.5, 0.5);
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        DensityChart::new(&model).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Normal distribution"));
        assert!(text.contains("N(1.50, 0.50)"));
        assert!(text.contains("μ=1.50"));
        assert!(text.contains("-4.0"));
        assert!(text.contains("0.8"));
    }
}
