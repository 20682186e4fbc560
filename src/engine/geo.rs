use log::info;
use std::collections::HashMap;
use std::path::Path;

use crate::utils::error::{AppError, AppResult};

/// Country code to map coordinate table.
///
/// Membership decides which traffic links are plottable: records referencing
/// a country without coordinates are dropped from the map, never an error.
/// The table is external configuration; the built-in set covers the demo
/// countries and can be replaced wholesale from a JSON file of the shape
/// `{"US": [-95.7129, 37.0902], ...}` (longitude first).
#[derive(Debug, Clone)]
pub struct GeoTable {
    coords: HashMap<String, [f64; 2]>,
}

impl GeoTable {
    /// Built-in coordinate table.
    pub fn builtin() -> Self {
        let coords = [
            ("US", [-95.7129, 37.0902]),
            ("CN", [104.1954, 35.8617]),
            ("IN", [78.9629, 20.5937]),
            ("RU", [105.3188, 61.5240]),
            ("DE", [10.4515, 51.1657]),
            ("GB", [-3.435, 55.3781]),
            ("FR", [2.2137, 46.2276]),
            ("JP", [138.2529, 36.2048]),
            ("BR", [-51.9253, -14.2350]),
            ("AU", [133.7751, -25.2744]),
            ("CA", [-106.3468, 56.1304]),
            // RFC1918 traffic is geolocated as "Internal" upstream; pin it
            // near the US centroid so it still renders.
            ("Internal", [-95.0, 37.0]),
        ]
        .into_iter()
        .map(|(code, pos)| (code.to_string(), pos))
        .collect();

        Self { coords }
    }

    /// Load a replacement table from a JSON file. Failures carry the file
    /// path so a bad `--geo-table` argument is diagnosable from the error.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::GeoTableError(format!("{}: {}", path.display(), e)))?;
        let coords: HashMap<String, [f64; 2]> = serde_json::from_str(&raw)
            .map_err(|e| AppError::GeoTableError(format!("{}: {}", path.display(), e)))?;
        info!("Loaded coordinate table with {} countries from {}", coords.len(), path.display());
        Ok(Self { coords })
    }

    /// Coordinates for a country code, if the table knows it.
    pub fn coords(&self, country: &str) -> Option<[f64; 2]> {
        self.coords.get(country).copied()
    }

    /// Whether the table has coordinates for the given country code.
    pub fn contains(&self, country: &str) -> bool {
        self.coords.contains_key(country)
    }

    /// Number of mapped countries.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
