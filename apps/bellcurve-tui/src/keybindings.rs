//! Keybinding definitions

use crossterm::event::KeyCode;

/// Number of slider steps moved by the fast keys
pub const FAST_STEPS: i32 = 5;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Toggle help
    ToggleHelp,
    /// Focus the next slider
    FocusNext,
    /// Focus the previous slider
    FocusPrev,
    /// Move the focused slider by a number of steps
    Adjust(i32),
    /// Restore the initial parameters
    Reset,
    /// Close overlays / clear the status line
    Cancel,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Adjust(-1)),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Adjust(1)),
        KeyCode::Char('H') => Some(Action::Adjust(-FAST_STEPS)),
        KeyCode::Char('L') => Some(Action::Adjust(FAST_STEPS)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
