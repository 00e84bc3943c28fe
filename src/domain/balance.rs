//! Balance summary types.

use serde::Deserialize;

use super::transaction::deserialize_int_string;
use crate::format::{format_currency, parse_int};

/// Balance totals as received over the wire, in centavos.
///
/// A missing or null total decodes as empty and renders as `R$ NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBalance {
    #[serde(default, deserialize_with = "deserialize_int_string")]
    pub income: String,
    #[serde(default, deserialize_with = "deserialize_int_string")]
    pub outcome: String,
    #[serde(default, deserialize_with = "deserialize_int_string")]
    pub total: String,
}

/// Balance totals formatted for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl DisplayBalance {
    /// Format each raw total independently.
    ///
    /// Outcome is shown without the `"- "` prefix used in the table.
    #[must_use]
    pub fn from_raw(raw: &RawBalance) -> Self {
        Self {
            income: format_currency(parse_int(&raw.income)),
            outcome: format_currency(parse_int(&raw.outcome)),
            total: format_currency(parse_int(&raw.total)),
        }
    }
}
