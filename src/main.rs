//! weaviate-tui - A terminal dashboard for a Weaviate store
//!
//! This is the main entry point for the weaviate-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, Overrides};
use crate::logging::LoggingConfig;
use crate::services::HttpDashboardApi;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{error, info};

/// Terminal dashboard for browsing and managing a Weaviate store
#[derive(Parser, Debug)]
#[command(name = "weaviate-tui", version, about)]
struct Cli {
    /// Dashboard server base URL (overrides config and WEAVIATE_TUI_URL)
    #[arg(long)]
    url: Option<String>,

    /// Initial object browser limit
    #[arg(long)]
    limit: Option<u32>,

    /// Directory the schema export is written to
    #[arg(long)]
    export_dir: Option<String>,

    /// Persist the resolved configuration to ~/.weaviate-tui/config.json
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(&Overrides {
        base_url: cli.url,
        object_limit: cli.limit,
        export_dir: cli.export_dir,
    });
    if cli.save_config {
        config.save().context("Failed to save config")?;
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = LoggingConfig::new(Config::log_dir(), &config.log_level).init()?;
    info!(base_url = %config.base_url, "starting");

    let api = HttpDashboardApi::from_config(&config);
    let mut app = App::new(Box::new(api), config);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = %format!("{:#}", err), "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exited");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    draw(tui, app)?;
    // First load runs after the initial frame so its loading states show
    process(tui, app, Action::Startup)?;

    while !app.should_quit {
        draw(tui, app)?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                process(tui, app, action)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

/// Apply an action and every follow-up it produces, redrawing in between
fn process(tui: &mut Tui, app: &mut App, action: Action) -> Result<()> {
    let mut current_action = app.update(action)?;
    while let Some(next) = current_action {
        draw(tui, app)?;
        current_action = app.update(next)?;
    }
    Ok(())
}

fn draw(tui: &mut Tui, app: &mut App) -> Result<()> {
    tui.draw(|frame| {
        if let Err(e) = app.draw(frame, frame.area()) {
            error!(error = %e, "draw failed");
        }
    })
}
