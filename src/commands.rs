//! Command pattern for key event handling.
//!
//! Key input is mapped to an [`AppCommand`] first and executed second, so the
//! bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// All commands the dashboard can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Move the table selection up.
    MoveUp,
    /// Move the table selection down.
    MoveDown,
    /// Jump to the first row.
    JumpTop,
    /// Jump to the last row.
    JumpBottom,
    /// Key has no binding.
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Map a key event to a command.
#[must_use]
pub fn map_key(key: KeyEvent) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppCommand::Quit,
            _ => AppCommand::Noop,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Home | KeyCode::Char('g') => AppCommand::JumpTop,
        KeyCode::End | KeyCode::Char('G') => AppCommand::JumpBottom,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
