use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api::handlers::{
    analyze::analyze,
    reports::{get_report, list_reports},
};

/// Root endpoint to provide information about the API
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "NetX API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Network traffic forensics engine with risk scoring",
        "endpoints": [
            {
                "path": "/api/analyze",
                "method": "POST",
                "description": "Analyze a classified packet dataset and store the report"
            },
            {
                "path": "/api/reports",
                "method": "GET",
                "description": "List recently generated reports"
            },
            {
                "path": "/api/reports/{id}",
                "method": "GET",
                "description": "Get a stored report by ID"
            }
        ]
    }))
}

/// Configure API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint
        .route("/", web::get().to(index))
        .service(
            web::scope("/api")
                // Report generation
                .route("/analyze", web::post().to(analyze))
                // Report history
                .service(
                    web::scope("/reports")
                        .route("", web::get().to(list_reports))
                        .route("/{id}", web::get().to(get_report)),
                ),
        );
}
