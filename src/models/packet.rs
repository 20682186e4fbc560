use serde::{Deserialize, Serialize};

/// A single classified network packet, as delivered by the upstream
/// capture analyzer. Field names match the analyzer's JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketRecord {
    /// Capture timestamp, display-only (never parsed numerically here)
    #[serde(default)]
    pub timestamp: String,

    /// Source IP address (opaque string, used only for display)
    #[serde(default)]
    pub src_ip: String,

    /// Destination IP address (opaque string, used only for display)
    #[serde(default)]
    pub dst_ip: String,

    /// ISO-like country code of the source, may be unmapped or empty
    #[serde(default)]
    pub src_country: String,

    /// ISO-like country code of the destination, may be unmapped or empty
    #[serde(default)]
    pub dst_country: String,

    /// Source port as reported by the analyzer
    #[serde(default)]
    pub src_port: String,

    /// Destination port as reported by the analyzer
    #[serde(default)]
    pub dst_port: String,

    /// Protocol label (e.g. TCP, UDP, DNS); empty counts as "Unknown"
    #[serde(default)]
    pub protocol: String,

    /// Packet length in bytes as reported by the analyzer
    #[serde(default)]
    pub length: usize,

    /// Whether the upstream classifier flagged this packet
    #[serde(default)]
    pub is_malicious: bool,

    /// Threat label, meaningful only when `is_malicious` is true
    #[serde(default)]
    pub threat_type: Option<String>,

    /// Matched indicator value (IP, domain, hash), present only on detections
    #[serde(default)]
    pub ioc_value: Option<String>,
}

impl PacketRecord {
    /// Protocol name normalized for aggregation: empty becomes "Unknown".
    pub fn protocol_name(&self) -> &str {
        if self.protocol.is_empty() {
            "Unknown"
        } else {
            &self.protocol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        // Upstream sometimes drops optional fields entirely; that must not
        // abort ingestion of the dataset.
        let record: PacketRecord =
            serde_json::from_str(r#"{"src_ip": "1.2.3.4", "is_malicious": true}"#).unwrap();
        assert_eq!(record.src_ip, "1.2.3.4");
        assert!(record.is_malicious);
        assert!(record.threat_type.is_none());
        assert!(record.ioc_value.is_none());
        assert_eq!(record.protocol_name(), "Unknown");
    }

    #[test]
    fn test_protocol_name_passthrough() {
        let record: PacketRecord = serde_json::from_str(r#"{"protocol": "DNS"}"#).unwrap();
        assert_eq!(record.protocol_name(), "DNS");
    }
}
