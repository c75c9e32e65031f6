//! EduDash CLI entry point

use anyhow::Result;
use clap::Parser;
use edudash::api::ApiClient;
use edudash::app::App;
use edudash::config::Config;
use edudash::ui::{render_dashboard, Tui};
use std::path::PathBuf;

/// Terminal analytics dashboard for the admissions assistant API
#[derive(Parser, Debug)]
#[command(name = "edudash", version, about)]
struct Cli {
    /// Base URL of the dashboard API
    #[arg(long)]
    url: Option<String>,

    /// Stats refresh interval in seconds
    #[arg(long)]
    interval: Option<u64>,

    /// Path to a config file (defaults to auto-discovery)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::auto_load()?,
    };
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }
    if let Some(secs) = cli.interval {
        config.refresh.stats_interval_secs = secs;
    }

    log::info!("🚀 EduDash v{}", env!("CARGO_PKG_VERSION"));
    log::info!("API endpoint: {}", config.api.base_url);

    let client = ApiClient::new(&config.api.base_url, config.request_timeout())?;
    let mut app = App::new(client, &config);
    app.start();

    let mut tui = Tui::new()?;

    while !app.should_quit {
        app.process_events();
        app.tick();

        tui.terminal().draw(|f| render_dashboard(f, &app))?;

        if App::should_poll_input()? {
            if let crossterm::event::Event::Key(key) = App::read_event()? {
                app.handle_key(key);
            }
        }
    }

    app.shutdown();
    Ok(())
}
