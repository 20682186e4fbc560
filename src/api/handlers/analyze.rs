use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;

use crate::api::AppState;
use crate::engine;
use crate::models::packet::PacketRecord;

/// Request body for running an analysis
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Name of the capture file the dataset came from
    pub filename: Option<String>,

    /// Classified packet records from the upstream analyzer
    pub packets: Vec<PacketRecord>,
}

/// Analyze a classified packet dataset and store the resulting report.
///
/// A body that is not a well-formed record sequence is rejected by the
/// JSON extractor with 400 before this handler runs; individual records
/// with missing optional fields deserialize with defaults and degrade
/// inside the engine instead of failing the request.
pub async fn analyze(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let AnalyzeRequest { filename, packets } = request.into_inner();
    let filename = filename.unwrap_or_else(|| "capture".to_string());

    info!("Analyzing {} ({} packets)", filename, packets.len());

    // Aggregation cost scales with capture size; keep it off the server
    // worker threads.
    let risk = state.risk.clone();
    let geo = state.geo.clone();
    let result =
        web::block(move || engine::analyze(&filename, &packets, &risk, &geo)).await;

    match result {
        Ok(report) => {
            state.store.insert(report.clone());
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            error!("Analysis task failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "error",
                "message": "Analysis failed"
            }))
        }
    }
}
