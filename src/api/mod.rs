pub mod handlers;
pub mod routes;

use std::sync::Arc;

use crate::engine::geo::GeoTable;
use crate::models::config::RiskConfig;
use crate::store::history::ReportStore;

/// Shared state handed to every handler
pub struct AppState {
    /// Retained report history
    pub store: Arc<ReportStore>,

    /// Risk scoring tunables
    pub risk: RiskConfig,

    /// Country coordinate table for the map view
    pub geo: GeoTable,
}
