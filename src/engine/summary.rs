use std::collections::{HashMap, HashSet};

use crate::models::config::RiskConfig;
use crate::models::packet::PacketRecord;
use crate::models::report::{Ioc, ProtocolCount, RiskAssessment, RiskLevel};

/// Output of the risk and IOC summarization pass
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSummary {
    /// Overall verdict
    pub risk: RiskAssessment,

    /// Deduplicated indicators, first-occurrence order
    pub iocs: Vec<Ioc>,

    /// Per-protocol counts, first-seen order
    pub protocols: Vec<ProtocolCount>,
}

/// Summarize a classified packet dataset in a single pass.
///
/// Deduplicates IOCs over the malicious subset (keyed on the
/// (value, threat_type) pair), counts packets per normalized protocol over
/// the whole dataset, and assigns a risk tier. Pure and deterministic:
/// identical input yields identical output, and an empty dataset is a
/// valid LOW-risk result rather than an error.
pub fn summarize(packets: &[PacketRecord], risk: &RiskConfig) -> TrafficSummary {
    let mut malicious_count = 0usize;

    let mut iocs: Vec<Ioc> = Vec::new();
    let mut seen_iocs: HashSet<(String, String)> = HashSet::new();

    let mut protocols: Vec<ProtocolCount> = Vec::new();
    let mut protocol_index: HashMap<String, usize> = HashMap::new();

    for record in packets {
        let name = record.protocol_name();
        match protocol_index.get(name) {
            Some(&i) => protocols[i].count += 1,
            None => {
                protocol_index.insert(name.to_string(), protocols.len());
                protocols.push(ProtocolCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }

        // Benign records carry no meaningful threat fields; whatever is in
        // them must not leak into the IOC set.
        if !record.is_malicious {
            continue;
        }
        malicious_count += 1;

        // Detections with a dropped value or label still count, they just
        // show up with empty fields instead of aborting the report.
        let value = record.ioc_value.clone().unwrap_or_default();
        let threat_type = record.threat_type.clone().unwrap_or_default();
        if seen_iocs.insert((value.clone(), threat_type.clone())) {
            iocs.push(Ioc { value, threat_type });
        }
    }

    let level = score(malicious_count, &iocs, risk);

    TrafficSummary {
        risk: RiskAssessment {
            level,
            malicious_count,
            ioc_count: iocs.len(),
        },
        iocs,
        protocols,
    }
}

/// Risk tier for a capture. Rules are evaluated in escalating order so a
/// later match overrides an earlier one: LOW by default, MEDIUM on any
/// detection, CRITICAL when the malicious count exceeds the configured
/// threshold or any IOC type contains a configured marker substring
/// (case-sensitive).
fn score(malicious_count: usize, iocs: &[Ioc], risk: &RiskConfig) -> RiskLevel {
    let mut level = RiskLevel::Low;

    if malicious_count > 0 {
        level = RiskLevel::Medium;
    }

    let marked = iocs.iter().any(|ioc| {
        risk.critical_markers
            .iter()
            .any(|marker| ioc.threat_type.contains(marker.as_str()))
    });
    if malicious_count > risk.critical_threshold || marked {
        level = RiskLevel::Critical;
    }

    level
}
