use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::Serialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::models::report::ReportSummary;

/// Response for listing retained reports
#[derive(Serialize)]
struct ReportsResponse {
    reports: Vec<ReportSummary>,
    total: usize,
}

/// List retained reports, newest first
pub async fn list_reports(state: web::Data<AppState>) -> impl Responder {
    let reports = state.store.list();
    let total = reports.len();

    info!("Listing {} retained reports", total);

    HttpResponse::Ok().json(ReportsResponse { reports, total })
}

/// Get a full stored report by id
pub async fn get_report(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get(id) {
        Some(report) => HttpResponse::Ok().json(report),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "status": "error",
            "message": format!("Report with ID {} not found", id)
        })),
    }
}
