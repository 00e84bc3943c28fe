//! The combined `/transactions` payload and its display form.

use std::fmt;

use chrono::TimeZone;
use serde::Deserialize;

use super::balance::{DisplayBalance, RawBalance};
use super::transaction::{DisplayTransaction, RawTransaction};

/// Response body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionsResponse {
    pub balance: RawBalance,
    pub transactions: Vec<RawTransaction>,
}

/// Everything the view needs after one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub balance: DisplayBalance,
    /// Display transactions in the order the backend returned them.
    pub transactions: Vec<DisplayTransaction>,
}

impl Dashboard {
    /// Map a raw response into display values.
    #[must_use]
    pub fn from_response<Tz>(response: &TransactionsResponse, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let transactions = response
            .transactions
            .iter()
            .map(|raw| DisplayTransaction::from_raw(raw, tz))
            .collect();

        Self {
            balance: DisplayBalance::from_raw(&response.balance),
            transactions,
        }
    }
}
