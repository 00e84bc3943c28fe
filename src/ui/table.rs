//! Transaction table.
//!
//! One row per display transaction, in fetch order. The date column is
//! formatted at render time from the stored timestamp.

use std::fmt;

use chrono::TimeZone;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table, TableState},
};

use crate::domain::DisplayTransaction;
use crate::format::format_date;
use crate::theme::{HEADER_STYLE, SELECTED_STYLE, value_style};

use super::helpers::create_border_block;

/// Column headers, left to right.
pub const COLUMNS: [&str; 4] = ["Title", "Price", "Category", "Date"];

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(40),
    Constraint::Percentage(20),
    Constraint::Percentage(25),
    Constraint::Percentage(15),
];

/// Build the table row for one transaction.
fn transaction_row<'a, Tz>(txn: &'a DisplayTransaction, tz: &Tz) -> Row<'a>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Row::new(vec![
        Cell::from(txn.title.as_str()),
        Cell::from(Span::styled(
            txn.formatted_value.as_str(),
            value_style(txn.transaction_type),
        )),
        Cell::from(txn.category_title.as_str()),
        Cell::from(format_date(txn.created_at.as_ref(), tz)),
    ])
}

/// Render the transaction table under `title`.
pub fn render<Tz>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    transactions: &[DisplayTransaction],
    selected: Option<usize>,
    tz: &Tz,
) where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let header = Row::new(COLUMNS.map(Cell::from))
        .style(HEADER_STYLE)
        .bottom_margin(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| transaction_row(txn, tz))
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(create_border_block(title, false))
        .row_highlight_style(SELECTED_STYLE)
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

// ============================================================================
// Tests
// ============================================================================
