//! Data state for the dashboard view.
//!
//! Holds the two pieces of view state: the formatted balance and the list of
//! display transactions. Both start empty and are replaced wholesale when a
//! fetch succeeds.

use crate::domain::{Dashboard, DisplayBalance, DisplayTransaction};

// ============================================================================
// Phase
// ============================================================================

/// Whether the view has received data yet.
///
/// A failed fetch and a pending one are both `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Populated,
}

// ============================================================================
// Data State
// ============================================================================

#[derive(Debug, Default)]
pub struct DataState {
    /// Formatted balance; `None` until the first successful fetch.
    pub balance: Option<DisplayBalance>,
    /// Display transactions in fetch order.
    pub transactions: Vec<DisplayTransaction>,
}

impl DataState {
    /// Creates an empty data state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.balance.is_some() {
            Phase::Populated
        } else {
            Phase::Empty
        }
    }

    /// Replace both pieces of state with a freshly fetched dashboard.
    pub fn apply(&mut self, dashboard: Dashboard) {
        self.transactions = dashboard.transactions;
        self.balance = Some(dashboard.balance);
    }

    /// Returns the number of transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
