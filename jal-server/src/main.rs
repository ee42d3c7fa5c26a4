//! Jal Drishti backend - REST API for the field data collection app

mod api;
mod seed;
mod storage;

use std::path::PathBuf;

use tracing::{error, info};

use api::router::api_router;
use api::types::ApiContext;
use storage::Database;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_BIND: &str = "127.0.0.1:8001";

/// Initialize logging to stdout and a daily rolling file. Returns a guard
/// that must be held for the process lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "jal-server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,jal_server=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jal-drishti")
}

#[tokio::main]
async fn main() {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Guard must live for the entire process lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Jal Drishti backend starting");

    let db_path = std::env::var("JAL_DRISHTI_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir.join("jal-drishti.db"));

    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open database");
            std::process::exit(1);
        }
    };

    let app = api_router(ApiContext::new(db));

    let bind = std::env::var("JAL_DRISHTI_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %bind, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!(addr = %bind, "Listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped unexpectedly");
        std::process::exit(1);
    }
}
