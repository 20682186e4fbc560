use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::packet::PacketRecord;

/// Coarse severity tier assigned to an analyzed capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    Critical,
}

/// Overall verdict for a capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Severity tier
    pub level: RiskLevel,

    /// Number of packets the classifier flagged
    pub malicious_count: usize,

    /// Number of distinct indicators of compromise
    pub ioc_count: usize,
}

/// A deduplicated indicator of compromise
///
/// Uniqueness is keyed on the (value, type) pair: the same indicator value
/// reported under two threat labels yields two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ioc {
    /// The indicator itself (IP, domain, hash, ...)
    pub value: String,

    /// Threat label the classifier attached to the detection
    #[serde(rename = "type")]
    pub threat_type: String,
}

/// Packet count for one normalized protocol name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolCount {
    /// Normalized protocol name ("Unknown" when the record carried none)
    pub name: String,

    /// Number of packets observed with that protocol
    pub count: usize,
}

/// A directed country-to-country traffic link for the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficEdge {
    /// Source country code
    pub from_country: String,

    /// Destination country code
    pub to_country: String,

    /// Threat flag of the first packet seen on this link
    pub is_malicious: bool,

    /// Source coordinates as [longitude, latitude]
    pub from_coords: [f64; 2],

    /// Destination coordinates as [longitude, latitude]
    pub to_coords: [f64; 2],
}

/// Complete forensic report for one analyzed capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Opaque report identifier, used as the history key
    pub id: Uuid,

    /// Name of the capture file the dataset came from
    pub filename: String,

    /// When this report was generated
    pub generated_at: DateTime<Utc>,

    /// Total number of packets in the dataset
    pub packet_count: usize,

    /// Overall verdict
    pub risk: RiskAssessment,

    /// Deduplicated indicators of compromise, first-occurrence order
    pub iocs: Vec<Ioc>,

    /// Per-protocol traffic distribution, first-seen order
    pub protocols: Vec<ProtocolCount>,

    /// Deduplicated cross-country traffic links, first-occurrence order
    pub edges: Vec<TrafficEdge>,

    /// Leading slice of the dataset for the traffic log table
    pub sample: Vec<PacketRecord>,
}

/// Compact view of a stored report for history listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Report identifier
    pub id: Uuid,

    /// Capture file name
    pub filename: String,

    /// Generation time
    pub generated_at: DateTime<Utc>,

    /// Total packets analyzed
    pub packet_count: usize,

    /// Severity tier
    pub level: RiskLevel,
}

impl AnalysisReport {
    /// Build the compact listing entry for this report.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            id: self.id,
            filename: self.filename.clone(),
            generated_at: self.generated_at,
            packet_count: self.packet_count,
            level: self.risk.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
    }

    #[test]
    fn test_ioc_type_field_name() {
        let ioc = Ioc {
            value: "203.0.113.7".into(),
            threat_type: "C2".into(),
        };
        let json = serde_json::to_value(&ioc).unwrap();
        assert_eq!(json["type"], "C2");
        assert_eq!(json["value"], "203.0.113.7");
    }
}
