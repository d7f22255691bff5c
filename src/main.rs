/*****************************************************************************************
 *
 *  promodb – In-memory promotions lookup service
 *  ----------------------------------------------
 *
 *  Loads promotions.csv once at startup, then serves GET /promotions/{id}.
 *
 *****************************************************************************************/

use std::path::Path;
use std::process::ExitCode;

use axum::serve;
use tokio::net::TcpListener;
use tracing_subscriber::FmtSubscriber;

use promodb::app;
use promodb::config::{locate_config, AppConfig};
use promodb::errors::StartupError;
use promodb::loader::load_promotions;
use promodb::state::promotions::PromotionStore;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            eprintln!("promodb: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    //
    // ────────────────────────────────────────────────────────
    //  Locate and load config.json (EXE folder or its parent)
    // ────────────────────────────────────────────────────────
    //
    let config_path = locate_config();
    let cfg = match &config_path {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    //
    // ────────────────────────────────────────────────────────
    //  Configure logging
    // ────────────────────────────────────────────────────────
    //
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.level_filter())
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("promodb: tracing subscriber already set: {e}");
    }

    tracing::info!("Starting promodb…");
    match &config_path {
        Some(path) => tracing::info!("Loaded config.json from {}", path.display()),
        None => tracing::info!("No config.json found, using defaults"),
    }
    tracing::info!("Configuration: {:?}", cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Create the store and run the one-time load
    // ────────────────────────────────────────────────────────
    //
    let store = PromotionStore::new();
    load_promotions(Path::new(&cfg.promotions_path), &store)?;

    //
    // ────────────────────────────────────────────────────────
    //  Bind server and start listening
    // ────────────────────────────────────────────────────────
    //
    let app = app::build_app(store);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Listening on http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .map_err(StartupError::Serve)
}

//
// ─────────────────────────────────────────────────────────────
//  Graceful shutdown handler
// ─────────────────────────────────────────────────────────────
//
async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    tracing::warn!("CTRL+C received — shutting down. Goodbye.");
}
