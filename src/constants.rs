//! Application constants for the finboard TUI.
//!
//! Centralized values for UI dimensions, timing, formatting, and defaults.

use std::time::Duration;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the balance summary cards (in rows).
///
/// Border, label spacer, value, border, plus one row of padding.
pub const CARD_HEIGHT: u16 = 5;

/// Height of the footer area (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Timing Constants
// ============================================================================

/// Tick rate of the main loop (redraw interval).
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Formatting Constants
// ============================================================================

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Number of smallest currency units in one whole unit.
pub const CENTS_PER_UNIT: u64 = 100;

/// Prefix applied to the formatted value of outcome transactions.
pub const OUTCOME_PREFIX: &str = "- ";

/// Text shown for a timestamp that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

// ============================================================================
// Defaults
// ============================================================================

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "finboard";

/// Backend base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Path of the combined balance + transactions endpoint.
pub const TRANSACTIONS_ENDPOINT: &str = "/transactions";
