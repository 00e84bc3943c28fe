//! UI helper functions for creating styled blocks.

use ratatui::{
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, HIGHLIGHT_BORDER_STYLE, TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block with a padded title.
///
/// Highlighted blocks use a double border in the accent color.
#[must_use]
pub fn create_border_block(title: &str, highlighted: bool) -> Block<'_> {
    let (border_style, border_set) = if highlighted {
        (HIGHLIGHT_BORDER_STYLE, border::DOUBLE)
    } else {
        (BORDER_STYLE, border::ROUNDED)
    };

    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(TITLE_STYLE)
        .border_set(border_set)
        .border_style(border_style)
}

// ============================================================================
// Tests
// ============================================================================
