//! Key handling for the display.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the display to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        // Releases and repeats arrive on some platforms; only presses count
        if event.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Esc, _) => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Key bindings shown in the footer.
pub const KEY_HELP: &[(&str, &str)] = &[("q/Esc", "close"), ("Ctrl-C", "close")];
