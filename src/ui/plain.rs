//! Plain-text rendering of the dashboard for non-interactive output.

use std::fmt;

use chrono::TimeZone;

use crate::format::format_date;
use crate::state::DataState;

use super::cards::BalanceCard;
use super::table::COLUMNS;

const COLUMN_GAP: &str = "  ";

/// Render the cards and table as aligned text, one line per row.
///
/// Each balance line is keyed by the card's lookup id so scripts can pick a
/// value out with `grep`. Trailing whitespace is trimmed from every line.
#[must_use]
pub fn render_plain<Tz>(data: &DataState, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut lines = Vec::new();

    let key_width = BalanceCard::ALL
        .iter()
        .map(|card| card.lookup_id().len())
        .max()
        .unwrap_or(0)
        + 1;
    for card in BalanceCard::ALL {
        lines.push(format!(
            "{:<key_width$}{}",
            card.lookup_id(),
            card.value(data.balance.as_ref())
        ));
    }

    lines.push(String::new());

    let rows: Vec<[String; 4]> = data
        .transactions
        .iter()
        .map(|txn| {
            [
                txn.title.clone(),
                txn.formatted_value.clone(),
                txn.category_title.clone(),
                format_date(txn.created_at.as_ref(), tz),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    lines.push(join_row(&COLUMNS.map(str::to_string), &widths));
    lines.extend(rows.iter().map(|row| join_row(row, &widths)));

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}
