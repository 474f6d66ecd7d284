//! showbill-web - Booking directory service
//!
//! Single-process HTTP service over a SQLite database: browse and search
//! venues and artists, schedule shows between them. View models are JSON;
//! rendering happens in an external layer.

use anyhow::Result;
use clap::Parser;
use showbill_common::config::ServiceConfig;
use showbill_web::{build_router, db, AppState};
use std::path::Path;
use tracing::{error, info};

/// Command-line options; every value can also come from the environment or
/// the TOML config file (CLI wins).
#[derive(Debug, Parser)]
#[command(name = "showbill-web", version)]
struct Args {
    /// Root folder holding showbill.db and the log sink
    #[arg(long, value_name = "DIR")]
    root_folder: Option<String>,

    /// HTTP listen port
    #[arg(long)]
    port: Option<u16>,

    /// Append structured log lines to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,
}

/// Initialize the tracing subscriber.
///
/// With a file sink, lines carry timestamp, level, message, and source
/// file:line, ANSI-free, appended to the configured file.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServiceConfig::resolve(
        args.root_folder.as_deref(),
        args.port,
        args.log_file.as_deref(),
    );

    init_tracing(config.log_file.as_deref())?;

    // Build identification immediately after tracing init
    info!(
        "Starting Showbill (showbill-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    config.ensure_root_folder()?;
    let db_path = config.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match db::init_database_pool(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("showbill-web listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
