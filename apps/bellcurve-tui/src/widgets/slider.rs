//! Horizontal slider for one distribution parameter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use bellcurve_core::ParameterRange;

const TRACK: &str = "─";
const KNOB: &str = "●";

/// A one-line slider: `Mean: 0.00  -3.0 ├────●────┤ 3.0`
pub struct ParameterSlider<'a> {
    label: &'a str,
    value: f64,
    range: ParameterRange,
    focused: bool,
}

impl<'a> ParameterSlider<'a> {
    pub fn new(label: &'a str, value: f64, range: ParameterRange) -> Self {
        Self {
            label,
            value,
            range,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Column of the knob within a track of `width` cells
    pub fn knob_offset(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let fraction = self.range.fraction(self.value);
        (fraction * f64::from(width - 1)).round() as u16
    }
}

impl Widget for ParameterSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let knob_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if self.focused { "> " } else { "  " };
        let head = format!("{}{:<13}", marker, self.label);
        let min = format!("{:.1} ├", self.range.min);
        let max = format!("┤ {:.1}", self.range.max);

        let fixed = (head.chars().count() + min.chars().count() + max.chars().count()) as u16;
        let y = area.y;
        let (x, _) = buf.set_stringn(area.x, y, &head, area.width as usize, label_style);

        // Too narrow for a track: the label alone is still useful
        if area.width <= fixed {
            return;
        }
        let track_width = area.width - fixed;

        let (x, _) = buf.set_stringn(
            x,
            y,
            &min,
            min.chars().count(),
            Style::default().fg(Color::DarkGray),
        );
        for i in 0..track_width {
            buf.set_string(x + i, y, TRACK, Style::default().fg(Color::DarkGray));
        }
        buf.set_string(x + self.knob_offset(track_width), y, KNOB, knob_style);
        buf.set_string(x + track_width, y, &max, Style::default().fg(Color::DarkGray));
    }
}
