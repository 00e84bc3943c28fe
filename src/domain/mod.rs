//! Domain types for the finboard dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for fetching and decoding dashboard data
//! - [`transaction`] - Raw and display transactions
//! - [`balance`] - Raw and display balance totals
//! - [`dashboard`] - The combined `/transactions` payload

// ============================================================================
// Module Declarations
// ============================================================================

pub mod balance;
pub mod dashboard;
pub mod error;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use balance::DisplayBalance;
pub use dashboard::{Dashboard, TransactionsResponse};
pub use error::DashboardError;
pub use transaction::{DisplayTransaction, TransactionType};
