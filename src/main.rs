mod calendar;
mod cli;
mod config;
mod db;
mod export;
mod models;
mod prayer_times;
mod reference;
mod store;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use store::Tracker;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    reference::validate().context("Built-in reference data is invalid")?;
    let config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    let mut tracker = Tracker::open(conn);
    let now = handlers::current_instant(cli.at.as_deref())?;
    let start = config.ramadan.start_date;
    let resolved = calendar::resolve(now, start, config.ramadan.policy());
    log::debug!("{} resolves to {:?}", now, resolved);

    match cli.command {
        Some(Commands::Today) => handlers::handle_today(&tracker, &config, &resolved)?,
        Some(Commands::Times) => handlers::handle_times(&config, &resolved)?,
        Some(Commands::Mark {
            prayer,
            status,
            toggle,
        }) => handlers::handle_mark(&mut tracker, &resolved, &prayer, &status, toggle)?,
        Some(Commands::Quran { surah, ayah }) => {
            handlers::handle_quran(&mut tracker, &resolved, surah, ayah.as_deref())?
        }
        Some(Commands::Infaq { amount, add, reset }) => {
            handlers::handle_infaq(&mut tracker, &resolved, amount.as_deref(), add, reset)?
        }
        Some(Commands::History) => handlers::handle_history(&tracker)?,
        Some(Commands::Summary) => handlers::handle_summary(&tracker, &resolved)?,
        Some(Commands::Export { output }) => handlers::handle_export(&tracker, output.as_deref())?,
        Some(Commands::Theme { choice }) => handlers::handle_theme(&mut tracker, choice)?,
        Some(Commands::Surahs) => handlers::handle_surahs()?,
        Some(Commands::Config { action }) => handlers::handle_config(&config, &action)?,

        // No subcommand → launch TUI
        None => {
            let clock_offset = now - chrono::Local::now().naive_local();
            tui::app::run(tracker, config, clock_offset)?
        }
    }

    Ok(())
}
