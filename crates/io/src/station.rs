//! Station table: per-segment metadata and harmonic constants.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use poseidon_harmonics::ConstituentSet;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate;

// ---------------------------------------------------------------------------
// On-disk schema
// ---------------------------------------------------------------------------

/// One station record as it appears in the JSON file.
///
/// `constituents` maps catalog names to `[amplitude_m, phase_lag_deg]`
/// pairs; validation happens after parsing, when the record is turned
/// into a [`Station`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StationRecord {
    name: String,
    refstation: String,
    longitude: f64,
    latitude: f64,
    mean: f64,
    constituents: BTreeMap<String, (f64, f64)>,
}

// ---------------------------------------------------------------------------
// Station
// ---------------------------------------------------------------------------

/// One model segment: identifying metadata plus validated harmonic
/// constants ready for synthesis.
#[derive(Debug, Clone)]
pub struct Station {
    /// Human-readable place name.
    name: String,
    /// Reference station the minor constituents were inferred from.
    refstation: String,
    /// Degrees east, negative west of Greenwich.
    longitude: f64,
    /// Degrees north.
    latitude: f64,
    /// The validated constituent constants.
    constituents: ConstituentSet,
}

impl Station {
    /// Human-readable place name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference station the minor constituents were inferred from.
    pub fn refstation(&self) -> &str {
        &self.refstation
    }

    /// Degrees east, negative west of Greenwich.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Degrees north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The validated constituent constants.
    pub fn constituents(&self) -> &ConstituentSet {
        &self.constituents
    }

    /// Mean water level in meters above MLLW.
    pub fn mean(&self) -> f64 {
        self.constituents.mean()
    }
}

// ---------------------------------------------------------------------------
// StationTable
// ---------------------------------------------------------------------------

/// All stations from one file, keyed by segment identifier.
#[derive(Debug, Clone)]
pub struct StationTable {
    stations: BTreeMap<String, Station>,
}

impl StationTable {
    /// Look up a segment.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::SegmentNotFound`] when the identifier is not in
    /// the table.
    pub fn get(&self, segment: &str) -> Result<&Station, IoError> {
        self.stations
            .get(segment)
            .ok_or_else(|| IoError::SegmentNotFound {
                segment: segment.to_string(),
                available: self.stations.len(),
            })
    }

    /// Segment identifiers in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    /// Segments and their stations in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Station)> {
        self.stations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stations in the table.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` when the table holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

// ---------------------------------------------------------------------------
// read_stations
// ---------------------------------------------------------------------------

/// Read a station table from a JSON file.
///
/// Every record must carry the full constituent catalog; partial or
/// malformed records fail the whole load. Coordinate range violations are
/// accumulated across the file and reported together.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when `path` does not exist,
/// [`IoError::Json`] on parse failures, [`IoError::Validation`] for
/// out-of-range coordinates, and [`IoError::Harmonics`] when a record's
/// constants are rejected.
pub fn read_stations(path: &Path) -> Result<StationTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let records: BTreeMap<String, StationRecord> = serde_json::from_str(&text)?;

    validate::validate_coordinates(
        records
            .iter()
            .map(|(segment, r)| (segment.as_str(), r.longitude, r.latitude)),
    )
    .finish()?;

    let mut stations = BTreeMap::new();
    for (segment, record) in records {
        let constituents = ConstituentSet::from_named(record.mean, &record.constituents)
            .map_err(|e| IoError::Harmonics {
                segment: segment.clone(),
                reason: e.to_string(),
            })?;
        debug!(segment = %segment, name = %record.name, "validated station record");
        stations.insert(
            segment,
            Station {
                name: record.name,
                refstation: record.refstation,
                longitude: record.longitude,
                latitude: record.latitude,
                constituents,
            },
        );
    }

    info!(
        path = %path.display(),
        stations = stations.len(),
        "loaded station table"
    );
    Ok(StationTable { stations })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_pair_arrays() {
        let json = r#"{
            "name": "Seattle",
            "refstation": "Seattle",
            "longitude": -122.34,
            "latitude": 47.60,
            "mean": 2.01,
            "constituents": { "M2": [1.07, 10.3] }
        }"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Seattle");
        assert_eq!(record.constituents["M2"], (1.07, 10.3));
    }

    #[test]
    fn record_rejects_unknown_fields() {
        let json = r#"{
            "name": "Seattle",
            "refstation": "Seattle",
            "longitude": -122.34,
            "latitude": 47.60,
            "mean": 2.01,
            "depth": 12.0,
            "constituents": {}
        }"#;
        assert!(serde_json::from_str::<StationRecord>(json).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_stations(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
