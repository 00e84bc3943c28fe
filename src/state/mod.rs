//! State management for the finboard TUI.
//!
//! - [`DataState`] - fetched and formatted dashboard data
//! - [`NavigationState`] - table selection
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  AppMessage  ┌──────────────────────────────┐
//! │ loader task  │ ───────────▶ │             App              │
//! │ (spawned on  │   (mpsc)     ├───────────────┬──────────────┤
//! │  mount)      │              │   DataState   │ Navigation   │
//! └──────────────┘              └───────────────┴──────────────┘
//! ```
//!
//! The loader is the only producer of data; the main loop is the only
//! writer of state.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::domain::Dashboard;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;

pub mod config;
pub mod data;
pub mod navigation;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{DataState, Phase};
pub use navigation::NavigationState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from async tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The transactions endpoint answered and its payload was mapped.
    DashboardLoaded(Dashboard),
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Backend base URL, overriding the configured one.
    pub api_url: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Fetched dashboard data.
    pub data: DataState,

    /// Table selection.
    pub nav: NavigationState,

    /// Whether the application should exit.
    pub exit: bool,

    // NOTE: sends from the loader use `let _ = tx.send(...)`. The receiver is
    // dropped on exit and a late result is simply discarded.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Client for the finance backend.
    pub(crate) client: ApiClient,

    /// Whether the loader has been started.
    pub(crate) mounted: bool,

    /// Handle of the loader task.
    pub(crate) loader: Option<JoinHandle<()>>,
}

impl App {
    /// Returns the backend base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns the current phase of the view.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.data.phase()
    }
}
