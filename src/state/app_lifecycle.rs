//! Application lifecycle management.
//!
//! - `new()` - builds the app from config and startup options
//! - `mount()` - starts the one-shot transaction loader
//! - `run()` - main event loop
//! - message processing

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, DataState, NavigationState, StartupOptions};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let config = AppConfig::load();
        let api_url = config.resolve_api_url(startup_options.api_url.as_deref());
        let client = ApiClient::new(&api_url)?;
        tracing::info!("Using API at {}", client.base_url());
        Ok(Self::with_client(client))
    }

    /// Creates an App around an existing client, with empty state.
    #[must_use]
    pub fn with_client(client: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            data: DataState::new(),
            nav: NavigationState::new(),
            exit: false,
            message_tx,
            message_rx,
            client,
            mounted: false,
            loader: None,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.mount();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            if self.process_messages() {
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Transaction Loader
    // ========================================================================

    /// Start the transaction loader. Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        self.loader = Some(tokio::spawn(async move {
            Self::load_transactions(client, message_tx).await;
        }));
    }

    /// Fetch once and hand the result to the main loop.
    ///
    /// Failures are logged and otherwise swallowed: the view stays empty.
    async fn load_transactions(client: ApiClient, message_tx: mpsc::UnboundedSender<AppMessage>) {
        match client.load_dashboard(&chrono::Local).await {
            Ok(dashboard) => {
                tracing::info!(
                    "Loaded {} transactions",
                    dashboard.transactions.len()
                );
                // Receiver may be dropped during shutdown - safe to ignore
                let _ = message_tx.send(AppMessage::DashboardLoaded(dashboard));
            }
            Err(err) => {
                tracing::warn!("Failed to load transactions: {err}");
            }
        }
    }

    // ========================================================================
    // Message Processing
    // ========================================================================

    /// Drain pending messages. Returns `true` if any state changed.
    pub(crate) fn process_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
            changed = true;
        }
        changed
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::DashboardLoaded(dashboard) => {
                self.data.apply(dashboard);
                self.nav.clamp(self.data.transaction_count());
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
