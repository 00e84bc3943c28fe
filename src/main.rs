use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod format;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::ApiClient,
    logging::LogTarget,
    state::{App, AppConfig, DataState, StartupOptions},
};

// finboard version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
  __ _       _                         _
 / _(_)_ __ | |__   ___   __ _ _ __ __| |
| |_| | '_ \| '_ \ / _ \ / _` | '__/ _` |
|  _| | | | | |_) | (_) | (_| | | | (_| |
|_| |_|_| |_|_.__/ \___/ \__,_|_|  \__,_|
"#;

/// finboard - terminal dashboard for a personal finance API
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides the configured one)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Fetch once and print the dashboard as text
    Print,
    /// Show the configuration, or save a new API URL with --set-api-url
    Config {
        /// Persist this base URL as the default
        #[arg(long, value_name = "URL")]
        set_api_url: Option<String>,
    },
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("finboard v{VERSION}");
            Ok(())
        }
        Some(Commands::Config { set_api_url }) => run_config(set_api_url),
        Some(Commands::Print) => {
            logging::init(&LogTarget::Stderr)?;
            print_dashboard(cli.api_url).await
        }
        None => {
            if let Some(target) = logging::tui_target(logging::default_log_path()) {
                logging::init(&target)?;
            }
            run_tui(cli.api_url).await
        }
    }
}

async fn run_tui(api_url: Option<String>) -> Result<()> {
    let mut app = App::new(StartupOptions { api_url })?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Fetch once and write the plain-text dashboard to stdout.
///
/// A failed fetch prints the empty dashboard, matching the TUI.
async fn print_dashboard(api_url: Option<String>) -> Result<()> {
    let config = AppConfig::load();
    let client = ApiClient::new(&config.resolve_api_url(api_url.as_deref()))?;

    let mut data = DataState::new();
    match client.load_dashboard(&Local).await {
        Ok(dashboard) => data.apply(dashboard),
        Err(err) => tracing::warn!("Failed to load transactions: {err}"),
    }

    println!("{}", ui::render_plain(&data, &Local));
    Ok(())
}

fn run_config(set_api_url: Option<String>) -> Result<()> {
    let mut config = AppConfig::load();

    if let Some(url) = set_api_url {
        // Validate before persisting.
        let client = ApiClient::new(&url)?;
        config.api_url = client.base_url().to_string();
        let path = config.save()?;
        println!("Saved {}", path.display());
    }

    println!("api_url = {}", config.api_url);
    Ok(())
}
