pub mod edges;
pub mod geo;
pub mod summary;

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::models::config::RiskConfig;
use crate::models::packet::PacketRecord;
use crate::models::report::AnalysisReport;

/// How many leading records the report keeps for the traffic log table
const SAMPLE_SIZE: usize = 50;

/// Run both aggregation passes over a classified dataset and assemble the
/// full report. Pure apart from logging: no state survives the call and
/// the same input always yields the same aggregates.
pub fn analyze(
    filename: &str,
    packets: &[PacketRecord],
    risk: &RiskConfig,
    geo: &geo::GeoTable,
) -> AnalysisReport {
    let summary = summary::summarize(packets, risk);
    let edges = edges::build_edges(packets, geo);

    info!(
        "Analyzed {}: {} packets, {} malicious, {} IOCs, {} edges, risk {:?}",
        filename,
        packets.len(),
        summary.risk.malicious_count,
        summary.risk.ioc_count,
        edges.len(),
        summary.risk.level,
    );

    AnalysisReport {
        id: Uuid::new_v4(),
        filename: filename.to_string(),
        generated_at: Utc::now(),
        packet_count: packets.len(),
        risk: summary.risk,
        iocs: summary.iocs,
        protocols: summary.protocols,
        edges,
        sample: packets.iter().take(SAMPLE_SIZE).cloned().collect(),
    }
}
