//! Theme and styling constants for the finboard TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::TransactionType;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - titles and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Income amounts.
pub const INCOME_COLOR: Color = Color::Green;

/// Outcome amounts.
pub const OUTCOME_COLOR: Color = Color::Red;

/// Accent for the total card.
pub const TOTAL_COLOR: Color = Color::Rgb(255, 135, 44);

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for the highlighted card.
pub const HIGHLIGHT_BORDER_STYLE: Style = Style::new().fg(TOTAL_COLOR);

/// Title style for blocks.
pub const TITLE_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

/// Table header style.
pub const HEADER_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected table row.
pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Returns the style for an amount of the given transaction type.
#[must_use]
pub const fn value_style(transaction_type: TransactionType) -> Style {
    match transaction_type {
        TransactionType::Income => Style::new().fg(INCOME_COLOR),
        TransactionType::Outcome => Style::new().fg(OUTCOME_COLOR),
        TransactionType::Unknown => Style::new().fg(MUTED_COLOR),
    }
}
