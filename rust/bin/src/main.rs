//! `shiperpd` — the ShipERP server binary.
//!
//! Usage:
//!   shiperpd [--data-dir=PATH] [--sqlite=PATH] [--listen=ADDR]

use std::env;
use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use shiperp_core::{HeaderAuth, Module, ServiceConfig};
use shiperp_freight::FreightModule;
use shiperp_freight::service::FreightService;
use shiperp_sql::SqliteStore;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --version / --help early.
    for arg in &args {
        if arg == "--version" || arg == "-V" {
            println!("shiperpd {}", VERSION);
            return Ok(());
        }
        if arg == "--help" || arg == "-h" {
            print_usage();
            return Ok(());
        }
    }

    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_args(&args);

    if let Some(ref dir) = config.data_dir {
        std::fs::create_dir_all(dir)?;
    }

    let sqlite_path = config.resolve_sqlite_path();
    info!("Opening SQLite store at {}", sqlite_path.display());
    let sql = SqliteStore::open(&sqlite_path)?;

    let freight_module = FreightModule::new(
        FreightService::new(Box::new(sql))?,
        Arc::new(HeaderAuth),
    );
    info!("Freight module initialized");

    let modules: Vec<Box<dyn Module>> = vec![Box::new(freight_module)];

    // System endpoints plus each module's routes, merged at the root.
    let mut app: Router = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));
    for module in &modules {
        info!("Mounting {} routes", module.name());
        app = app.merge(module.routes());
    }
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("ShipERP server listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "shiperpd",
        "version": VERSION,
    }))
}

fn print_usage() {
    println!("shiperpd {}", VERSION);
    println!();
    println!("USAGE:");
    println!("    shiperpd [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --data-dir=PATH     Base data directory");
    println!("    --sqlite=PATH       SQLite database path (default: {{data-dir}}/data.sqlite)");
    println!("    --listen=ADDR       HTTP listen address (default: 0.0.0.0:8080)");
    println!("    --version, -V       Print version");
    println!("    --help, -h          Print this help");
}
