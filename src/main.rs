use std::path::Path;
use anyhow::Context;
use clap::Parser;

use rust_passgen::api::{self, AppState};
use rust_passgen::cli::Args;
use rust_passgen::core::config::Config;
use rust_passgen::generators::WORD_LIST;
use rust_passgen::logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    args.apply(&mut config);

    logging::init(&config).context("failed to initialise logging")?;
    log::info!("🔒 Starting Secure Password Generator");
    log::debug!("Loaded config: {:?}", config);

    // Load the word list before the first request needs it
    lazy_static::initialize(&WORD_LIST);
    log::info!("Word list loaded: {} words", WORD_LIST.len());

    let state = AppState::from_config(&config).context("failed to build breach lookup client")?;
    log::info!(
        "Breach lookups via {} (timeout {:?}, min interval {:?})",
        config.hibp_api_url, config.hibp_timeout, config.hibp_min_interval
    );

    api::start_server(state, &config)
        .await
        .context("API server failed")?;

    log::info!("✅ Shutdown complete.");
    Ok(())
}
