use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use netx::api::{routes, AppState};
use netx::engine::geo::GeoTable;
use netx::models::config::{AppConfig, RiskConfig, DEFAULT_CRITICAL_THRESHOLD};
use netx::store::history::ReportStore;
use netx::utils::logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Network traffic forensics engine with REST API")]
struct Args {
    /// Port for the REST API server
    #[clap(short, long, default_value = "8000")]
    port: u16,

    /// How many reports to retain in history
    #[clap(long, default_value = "5")]
    history_capacity: usize,

    /// JSON file overriding the built-in country coordinate table
    #[clap(long)]
    geo_table: Option<PathBuf>,

    /// Malicious packet count above which a capture is rated CRITICAL
    #[clap(long, default_value_t = DEFAULT_CRITICAL_THRESHOLD)]
    critical_threshold: usize,

    /// Threat-type substring that rates a capture CRITICAL (repeatable)
    #[clap(long = "critical-marker", value_name = "SUBSTRING")]
    critical_markers: Vec<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[clap(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger with specified level
    logging::init_logger(logging::get_log_level(&args.log_level));

    info!("Starting NetX v{}", env!("CARGO_PKG_VERSION"));

    // Create application config
    let risk = RiskConfig {
        critical_threshold: args.critical_threshold,
        critical_markers: if args.critical_markers.is_empty() {
            RiskConfig::default().critical_markers
        } else {
            args.critical_markers
        },
    };
    let config = AppConfig {
        port: args.port,
        history_capacity: args.history_capacity,
        geo_table: args.geo_table,
        risk,
    };

    // Load the coordinate table (external configuration for the map view)
    let geo = match &config.geo_table {
        Some(path) => GeoTable::from_file(path)?,
        None => GeoTable::builtin(),
    };
    info!("Coordinate table covers {} countries", geo.len());
    info!(
        "Risk scoring: CRITICAL above {} detections or on markers {:?}",
        config.risk.critical_threshold, config.risk.critical_markers
    );

    // Create a shared state for our application
    let app_state = web::Data::new(AppState {
        store: Arc::new(ReportStore::new(config.history_capacity)),
        risk: config.risk.clone(),
        geo,
    });

    info!("Starting NetX API server on port {}", config.port);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(format!("127.0.0.1:{}", config.port))?
    .run()
    .await?;

    Ok(())
}
