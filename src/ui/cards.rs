//! Balance summary cards.
//!
//! Each card has a stable lookup id (`balance-income`, `balance-outcome`,
//! `balance-total`). The `print` output keys each balance line by it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::domain::DisplayBalance;
use crate::theme::{INCOME_COLOR, OUTCOME_COLOR, TOTAL_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Balance Card
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCard {
    Income,
    Outcome,
    Total,
}

impl BalanceCard {
    /// Cards in display order.
    pub const ALL: [Self; 3] = [Self::Income, Self::Outcome, Self::Total];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Outcome => "Outcome",
            Self::Total => "Total",
        }
    }

    /// Stable identifier of the card.
    #[must_use]
    pub const fn lookup_id(self) -> &'static str {
        match self {
            Self::Income => "balance-income",
            Self::Outcome => "balance-outcome",
            Self::Total => "balance-total",
        }
    }

    /// The value shown on this card; blank while no balance is loaded.
    #[must_use]
    pub fn value(self, balance: Option<&DisplayBalance>) -> &str {
        match (self, balance) {
            (_, None) => "",
            (Self::Income, Some(b)) => &b.income,
            (Self::Outcome, Some(b)) => &b.outcome,
            (Self::Total, Some(b)) => &b.total,
        }
    }

    const fn value_style(self) -> Style {
        let color = match self {
            Self::Income => INCOME_COLOR,
            Self::Outcome => OUTCOME_COLOR,
            Self::Total => TOTAL_COLOR,
        };
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// Layout & Rendering
// ============================================================================

/// Split the cards row into one area per card.
#[must_use]
pub fn card_areas(area: Rect) -> [(BalanceCard, Rect); 3] {
    let [income, outcome, total] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
    [
        (BalanceCard::Income, income),
        (BalanceCard::Outcome, outcome),
        (BalanceCard::Total, total),
    ]
}

/// Render the three summary cards.
pub fn render(frame: &mut Frame, area: Rect, balance: Option<&DisplayBalance>) {
    for (card, card_area) in card_areas(area) {
        let block = create_border_block(card.label(), card == BalanceCard::Total);
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        if inner.height == 0 {
            continue;
        }

        let value_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        let value = Paragraph::new(card.value(balance))
            .style(card.value_style())
            .alignment(Alignment::Center);
        frame.render_widget(value, value_area);
    }
}

// ============================================================================
// Tests
// ============================================================================
