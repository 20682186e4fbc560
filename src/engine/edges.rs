use std::collections::HashSet;

use crate::engine::geo::GeoTable;
use crate::models::packet::PacketRecord;
use crate::models::report::TrafficEdge;

/// How a deduplicated edge gets its threat flag.
///
/// The shipped behavior is `FirstSeen`: the flag is frozen at the first
/// packet observed on the link, matching the report the product ships
/// today. `AnyMalicious` is the reading most people expect from "was this
/// link ever malicious" and exists so switching over is a one-line,
/// test-covered decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFlagPolicy {
    /// Keep the flag of the first packet seen on the link
    FirstSeen,
    /// Flag the link if any packet on it was malicious
    AnyMalicious,
}

/// Build the deduplicated set of directed country-to-country traffic links,
/// using the shipped first-wins flag policy.
pub fn build_edges(packets: &[PacketRecord], geo: &GeoTable) -> Vec<TrafficEdge> {
    build_edges_with_policy(packets, geo, EdgeFlagPolicy::FirstSeen)
}

/// Single pass over the dataset in input order. Records referencing a
/// country without coordinates are dropped (the map cannot plot them),
/// as are self-loops. Direction matters: (A,B) and (B,A) are distinct
/// links. Output is free of duplicate ordered pairs, in first-occurrence
/// order.
pub fn build_edges_with_policy(
    packets: &[PacketRecord],
    geo: &GeoTable,
    policy: EdgeFlagPolicy,
) -> Vec<TrafficEdge> {
    let mut edges: Vec<TrafficEdge> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for record in packets {
        let (from, to) = (record.src_country.as_str(), record.dst_country.as_str());
        if from == to {
            continue;
        }
        let (from_coords, to_coords) = match (geo.coords(from), geo.coords(to)) {
            (Some(f), Some(t)) => (f, t),
            _ => continue,
        };

        if seen.insert((from.to_string(), to.to_string())) {
            edges.push(TrafficEdge {
                from_country: from.to_string(),
                to_country: to.to_string(),
                is_malicious: record.is_malicious,
                from_coords,
                to_coords,
            });
        } else if policy == EdgeFlagPolicy::AnyMalicious && record.is_malicious {
            // Same ordered pair seen again: find the existing edge and
            // escalate its flag. Linear over already-emitted edges, which
            // is bounded by the country-pair count, not the packet count.
            if let Some(edge) = edges
                .iter_mut()
                .find(|e| e.from_country == from && e.to_country == to)
            {
                edge.is_malicious = true;
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(src: &str, dst: &str, malicious: bool) -> PacketRecord {
        PacketRecord {
            timestamp: String::new(),
            src_ip: "198.51.100.1".into(),
            dst_ip: "203.0.113.1".into(),
            src_country: src.into(),
            dst_country: dst.into(),
            src_port: String::new(),
            dst_port: String::new(),
            protocol: "TCP".into(),
            length: 64,
            is_malicious: malicious,
            threat_type: None,
            ioc_value: None,
        }
    }

    #[test]
    fn test_empty_input_yields_no_edges() {
        let edges = build_edges(&[], &GeoTable::builtin());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_first_wins_flag_is_frozen() {
        let packets = vec![record("US", "CN", false), record("US", "CN", true)];
        let edges = build_edges(&packets, &GeoTable::builtin());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from_country, "US");
        assert_eq!(edges[0].to_country, "CN");
        assert!(!edges[0].is_malicious);
    }

    #[test]
    fn test_any_malicious_policy_escalates() {
        let packets = vec![record("US", "CN", false), record("US", "CN", true)];
        let edges =
            build_edges_with_policy(&packets, &GeoTable::builtin(), EdgeFlagPolicy::AnyMalicious);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].is_malicious);
    }

    #[test]
    fn test_direction_matters() {
        let packets = vec![record("US", "CN", false), record("CN", "US", true)];
        let edges = build_edges(&packets, &GeoTable::builtin());
        assert_eq!(edges.len(), 2);
        assert!(!edges[0].is_malicious);
        assert!(edges[1].is_malicious);
    }

    #[test]
    fn test_self_loops_are_skipped() {
        let packets = vec![record("US", "US", true)];
        let edges = build_edges(&packets, &GeoTable::builtin());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_unmapped_countries_are_dropped_silently() {
        // "ZZ" and "" have no coordinates; neither side may be unmapped.
        let packets = vec![
            record("ZZ", "CN", true),
            record("US", "ZZ", true),
            record("", "CN", true),
            record("US", "CN", false),
        ];
        let edges = build_edges(&packets, &GeoTable::builtin());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from_country, "US");
    }

    #[test]
    fn test_no_duplicate_ordered_pairs() {
        let packets = vec![
            record("US", "CN", false),
            record("US", "RU", true),
            record("US", "CN", true),
            record("US", "RU", false),
            record("DE", "FR", false),
        ];
        let edges = build_edges(&packets, &GeoTable::builtin());

        let mut keys: Vec<_> = edges
            .iter()
            .map(|e| (e.from_country.as_str(), e.to_country.as_str()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), edges.len());
        assert_eq!(edges.len(), 3);
        // first-occurrence order
        assert_eq!(edges[0].to_country, "CN");
        assert_eq!(edges[1].to_country, "RU");
        assert_eq!(edges[2].from_country, "DE");
    }

    #[test]
    fn test_edges_carry_table_coordinates() {
        let table = GeoTable::builtin();
        let packets = vec![record("US", "CN", false)];
        let edges = build_edges(&packets, &table);
        assert_eq!(edges[0].from_coords, table.coords("US").unwrap());
        assert_eq!(edges[0].to_coords, table.coords("CN").unwrap());
    }
}
