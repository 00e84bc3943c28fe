//! Transaction types: the wire shape and the display-ready form.
//!
//! [`RawTransaction`] is deserialized straight from the backend payload.
//! [`DisplayTransaction`] is derived from it once per fetch and never mutated.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Deserializer};

use crate::constants::OUTCOME_PREFIX;
use crate::format::{Amount, format_currency, format_date, parse_date, parse_int};

// ============================================================================
// Transaction Type
// ============================================================================

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
    /// Any other value sent by the backend. Rendered like income.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` for outcome transactions.
    #[must_use]
    pub const fn is_outcome(&self) -> bool {
        matches!(self, Self::Outcome)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Category reference embedded in a raw transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCategory {
    pub title: String,
}

/// A transaction as received over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTransaction {
    pub id: String,
    pub title: String,
    /// Integer amount in centavos, string-encoded by the backend.
    #[serde(default, deserialize_with = "deserialize_int_string")]
    pub value: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: RawCategory,
    /// Missing or null reads as empty, which renders as `Invalid Date`.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub created_at: String,
}

/// Accept a JSON string, a JSON number, or `null` for integer fields.
///
/// The backend encodes these as strings, but numeric columns serialized
/// by other stacks arrive as numbers. Both are kept as text and parsed
/// later with the same prefix semantics. `null` becomes the empty string,
/// which parses as NaN.
pub(crate) fn deserialize_int_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<IntOrString>::deserialize(deserializer)? {
        Some(IntOrString::Text(text)) => text,
        Some(IntOrString::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Display Transaction
// ============================================================================

/// A transaction ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTransaction {
    pub id: String,
    pub title: String,
    /// Parsed amount; `NaN` when the raw value was malformed.
    pub value: Amount,
    /// Currency string, prefixed with `"- "` for outcomes.
    pub formatted_value: String,
    /// Creation date as `dd/mm/yyyy`, computed at fetch time.
    pub formatted_date: String,
    pub transaction_type: TransactionType,
    pub category_title: String,
    /// Parsed creation timestamp; `None` when unparseable.
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl DisplayTransaction {
    /// Build a display transaction from its wire form.
    ///
    /// No validation is performed: a malformed value becomes [`Amount::NaN`]
    /// and a malformed timestamp becomes `None`, both carried into the
    /// formatted strings as-is.
    #[must_use]
    pub fn from_raw<Tz>(raw: &RawTransaction, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let value = parse_int(&raw.value);
        let created_at = parse_date(&raw.created_at, tz);

        Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            value,
            formatted_value: format_signed_value(value, raw.transaction_type),
            formatted_date: format_date(created_at.as_ref(), tz),
            transaction_type: raw.transaction_type,
            category_title: raw.category.title.clone(),
            created_at,
        }
    }
}

/// Format a value with the outcome prefix applied when needed.
#[must_use]
pub fn format_signed_value(value: Amount, transaction_type: TransactionType) -> String {
    let formatted = format_currency(value);
    if transaction_type.is_outcome() {
        format!("{OUTCOME_PREFIX}{formatted}")
    } else {
        formatted
    }
}

// ============================================================================
// Tests
// ============================================================================
