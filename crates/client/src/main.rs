//! Daily guessing game client binary.
//!
//! Composition root: reads configuration from the environment (and `.env`),
//! sets up file logging, builds the day's game through
//! [`dle_bootstrap::GameBuilder`] and runs the terminal loop.
//!
//! # Examples
//!
//! ```bash
//! # Today's Clash Royale puzzle
//! cargo run -p dle-client
//!
//! # Brawl Stars, a fixed day, progress kept across runs
//! DLE_VARIANT=brawl-stars DLE_DATE=2025-03-01 DLE_DAILY_LOCK=true cargo run -p dle-client
//! ```
mod app;
mod input;
mod logging;
mod render;

use anyhow::Result;
use dle_bootstrap::{ClientConfig, GameBuilder};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();

    logging::setup_logging()?;

    tracing::info!("Starting dle client");
    tracing::info!("Variant: {}", config.variant);
    tracing::info!("Daily lock: {}", config.daily_lock);

    let game = GameBuilder::new(config).build()?;

    app::App::stdio(game).run()
}
