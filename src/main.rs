use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use anyhow::Context;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod db;
mod domain;
mod errors;
mod favorites;
mod responses;
mod router;
mod search;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e:#}");
        eprintln!("travel_finder failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // The subscriber needs the configured level, so report the source afterwards.
    let (config, source) = AppConfig::load()?;
    init_tracing(&config.general.log_level);
    match &source {
        Some(path) => tracing::info!("Loaded config from: {}", path.display()),
        None => tracing::info!("No config file found, using defaults"),
    }

    // 1️⃣ Open storage and make sure the schema exists
    let db = Database::new(config.storage.database_path.clone());
    init_db(&db).context("Database initialization failed")?;

    // 2️⃣ Shared state: favorites are loaded exactly once here
    let state = Arc::new(AppState::new(db, &config));

    // 3️⃣ Start the server
    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_addr()))?;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    // 4️⃣ Serve requests, passing the state handle into the closure
    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
