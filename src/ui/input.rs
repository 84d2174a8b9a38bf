use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::traits::Action;

/// Fallback keymap for keys no view consumed. Views in text-entry
/// mode swallow printable keys, so these only fire while browsing.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Char('p'), _) => Some(Action::TogglePlayback),
            (KeyCode::Char('+'), _) => Some(Action::VolumeUp),
            (KeyCode::Char('='), _) => Some(Action::VolumeUp),
            (KeyCode::Char('-'), _) => Some(Action::VolumeDown),
            (KeyCode::Char('y'), _) => Some(Action::OpenCookiePrompt),
            (KeyCode::Esc, _) => Some(Action::Back),
            _ => None,
        }
    }
}
