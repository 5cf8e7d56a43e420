//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use bellcurve_core::{ChartModel, Parameter, ParameterState};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::widgets::{DensityChart, ParameterSlider};

/// Main application state
pub struct App {
    /// Current mode (NORMAL, COMMAND)
    pub mode: Mode,
    /// Mean and sigma, bounded by their sliders
    pub state: ParameterState,
    /// Slider that receives adjustments
    pub focus: Parameter,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(state: ParameterState) -> Self {
        Self {
            mode: Mode::Normal,
            state,
            focus: Parameter::Mean,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let chart = self.state.chart();

        // Status bar, sliders, chart, command line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);
        self.render_sliders(frame, chunks[1], &chart);
        frame.render_widget(DensityChart::new(&chart), chunks[2]);
        self.render_command_line(frame, chunks[3]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_color = match self.mode {
            Mode::Normal => Color::Blue,
            Mode::Command => Color::Magenta,
        };

        let line = Line::from(vec![
            Span::raw(" bellcurve | "),
            Span::styled(
                format!("[{}]", self.mode.short_code()),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | N({:.2}, {:.2}) vs N(0, 1) | Press ? for help",
                self.state.mean(),
                self.state.sigma()
            )),
        ]);

        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_sliders(&self, frame: &mut Frame, area: Rect, chart: &ChartModel) {
        let block = Block::default().title("Parameters").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let sliders = [
            (Parameter::Mean, chart.mean_label.as_str()),
            (Parameter::Sigma, chart.sigma_label.as_str()),
        ];
        for ((parameter, label), row) in sliders.into_iter().zip(rows.iter()) {
            let slider = ParameterSlider::new(
                label,
                self.state.value(parameter),
                self.state.range(parameter),
            )
            .focused(self.focus == parameter);
            frame.render_widget(slider, *row);
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            Mode::Normal => self.status_message.clone().unwrap_or_else(|| {
                "h/l adjust | j/k switch slider | : for commands".to_string()
            }),
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
bellcurve - Help

Sliders:
  j/k, Tab  - Switch between mean and sigma
  h/l       - Decrease/increase by one step
  H/L       - Decrease/increase by five steps
  r         - Reset to initial values

Commands (: to enter command mode):
  :mean <value>   - Set the mean
  :sigma <value>  - Set sigma
  :reset          - Reset to initial values
  :q              - Quit

Other:
  ?       - Toggle this help
  Esc     - Close help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Action::FocusNext | Action::FocusPrev => {
                self.focus = self.focus.toggle();
                self.status_message = Some(format!("Adjusting {}", self.focus));
            }
            Action::Adjust(steps) => {
                let result = self.state.step(self.focus, steps);
                self.report(self.focus, result);
            }
            Action::Reset => self.reset(),
            Action::Cancel => {
                self.show_help = false;
                self.status_message = None;
            }
        }
        false
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn execute_command(&mut self) -> bool {
        let command = self.command_buffer.clone();
        let parts: Vec<&str> = command.split_whitespace().collect();
        if parts.is_empty() {
            return false;
        }

        match parts[0] {
            "q" | "quit" => {
                return true;
            }
            "mean" | "sigma" => {
                let parameter = if parts[0] == "mean" {
                    Parameter::Mean
                } else {
                    Parameter::Sigma
                };
                match parts.get(1).map(|s| s.parse::<f64>()) {
                    Some(Ok(value)) => {
                        let result = self.state.set(parameter, value);
                        self.focus = parameter;
                        self.report(parameter, result);
                    }
                    Some(Err(_)) => {
                        self.status_message = Some(format!("Invalid {} value", parameter));
                    }
                    None => {
                        self.status_message = Some(format!("Usage: :{} <value>", parameter));
                    }
                }
            }
            "reset" => self.reset(),
            "help" => {
                self.show_help = true;
            }
            _ => {
                self.status_message = Some(format!("Unknown command: {}", parts[0]));
            }
        }
        false
    }

    fn reset(&mut self) {
        self.state.reset();
        self.status_message = Some(format!(
            "Reset to mean {:.2}, sigma {:.2}",
            self.state.mean(),
            self.state.sigma()
        ));
    }

    fn report(&mut self, parameter: Parameter, result: bellcurve_core::Result<f64>) {
        self.status_message = Some(match result {
            Ok(value) => format!("{} = {:.2}", parameter.label(), value),
            Err(e) => e.to_string(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ParameterState::default())
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_command(app: &mut App, command: &str) -> bool {
        press(app, KeyCode::Char(':'));
        for c in command.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_adjust_focused_slider() {
        let mut app = App::default();

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.state.mean(), 0.2);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.focus, Parameter::Sigma);
        press(&mut app, KeyCode::Char('H'));
        assert_eq!(app.state.sigma(), 0.5);
        assert_eq!(app.status_message.as_deref(), Some("Sigma = 0.50"));
    }

    #[test]
    fn test_slider_stops_at_bounds() {
        let mut app = App::default();
        app.focus = Parameter::Sigma;
        for _ in 0..20 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.state.sigma(), 0.1);
    }

    #[test]
    fn test_reset() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state.mean(), 0.0);
    }

    #[test]
    fn test_commands() {
        let mut app = App::default();

        assert!(!type_command(&mut app, "mean 1.26"));
        assert_eq!(app.state.mean(), 1.3);
        assert_eq!(app.mode, Mode::Normal);

        type_command(&mut app, "sigma 0");
        assert_eq!(app.state.sigma(), 1.0);
        assert!(app.status_message.as_deref().unwrap().contains("Invalid sigma"));

        type_command(&mut app, "sigma abc");
        assert_eq!(app.status_message.as_deref(), Some("Invalid sigma value"));

        type_command(&mut app, "bogus");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Unknown command: bogus")
        );

        assert!(type_command(&mut app, "q"));
    }

    #[test]
    fn test_escape_leaves_command_mode() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.command_buffer.is_empty());
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::default();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_render_shows_sliders_and_chart() {
        let mut app = App::default();
        type_command(&mut app, "mean -1.5");

        let text = screen(&app);
        assert!(text.contains("Mean: -1.50"));
        assert!(text.contains("Sigma: 1.00"));
        assert!(text.contains("Normal distribution"));
        assert!(text.contains("μ=-1.50"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(screen(&app).contains("bellcurve - Help"));

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
