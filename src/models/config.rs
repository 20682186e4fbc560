use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default malicious-packet count above which a capture is CRITICAL
pub const DEFAULT_CRITICAL_THRESHOLD: usize = 10;

/// Default threat-type substrings that escalate a capture to CRITICAL
pub const DEFAULT_CRITICAL_MARKERS: &[&str] = &["C2", "Malware"];

/// Tunables for the risk scoring step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Malicious count strictly above this value forces CRITICAL
    pub critical_threshold: usize,

    /// Case-sensitive substrings of IOC threat types that force CRITICAL
    pub critical_markers: Vec<String>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            critical_markers: DEFAULT_CRITICAL_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the REST API server
    pub port: u16,

    /// How many reports the history retains before FIFO eviction
    pub history_capacity: usize,

    /// Optional JSON file overriding the built-in country coordinate table
    pub geo_table: Option<PathBuf>,

    /// Risk scoring tunables
    pub risk: RiskConfig,
}
