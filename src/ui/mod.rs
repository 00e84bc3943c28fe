//! UI rendering module for the finboard TUI.
//!
//! The render pass is a pure function of [`App`] state.
//!
//! # Module Structure
//!
//! - `header` - logo and API location
//! - `cards` - income / outcome / total summary cards
//! - `table` - transaction table
//! - `footer` - key hints
//! - `plain` - text rendering for the `print` subcommand
//! - `helpers` - shared block and buffer helpers

pub mod cards;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod plain;
pub mod table;

use std::fmt;

use chrono::TimeZone;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::constants::{CARD_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::state::{App, Phase};

pub use plain::render_plain;

// ============================================================================
// Layout
// ============================================================================

/// Screen areas of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub cards: Rect,
    pub table: Rect,
    pub footer: Rect,
}

/// Split the terminal area into header, cards, table, and footer.
#[must_use]
pub fn calculate_layout(area: Rect) -> DashboardLayout {
    let [header, cards, table, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    DashboardLayout {
        header,
        cards,
        table,
        footer,
    }
}

/// Title of the transaction table; shows the row count once data arrived.
#[must_use]
pub fn table_title(app: &App) -> String {
    match app.phase() {
        Phase::Empty => "Transactions".to_string(),
        Phase::Populated => format!("Transactions ({})", app.data.transaction_count()),
    }
}

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Render the dashboard, formatting dates in the local time zone.
pub fn render(app: &App, frame: &mut Frame) {
    render_in_zone(app, frame, &chrono::Local);
}

/// Render the dashboard, formatting dates in `tz`.
pub fn render_in_zone<Tz>(app: &App, frame: &mut Frame, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let layout = calculate_layout(frame.area());

    header::render(frame, layout.header, app.api_url());
    cards::render(frame, layout.cards, app.data.balance.as_ref());
    table::render(
        frame,
        layout.table,
        &table_title(app),
        &app.data.transactions,
        app.nav.selected,
        tz,
    );
    footer::render(frame, layout.footer);
}

// ============================================================================
// Tests
// ============================================================================
