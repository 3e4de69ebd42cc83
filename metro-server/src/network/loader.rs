//! CSV dataset loader.
//!
//! The dataset has one row per physical connection between two stations:
//!
//! ```text
//! Station,Connected_Station,Line
//! Rajiv Chowk,Barakhamba Road,Blue Line
//! Rajiv Chowk,Patel Chowk,Yellow Line
//! ```
//!
//! Extra columns are ignored and column order is free. Rows with a blank
//! station on either side are skipped with a warning; a blank line label is
//! kept and classified as unknown.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{LineLabel, Station};

use super::error::LoadError;
use super::graph::Network;

const STATION_COLUMN: &str = "Station";
const CONNECTED_COLUMN: &str = "Connected_Station";
const LINE_COLUMN: &str = "Line";

/// A row as it appears in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Station")]
    station: String,
    #[serde(rename = "Connected_Station")]
    connected_station: String,
    #[serde(rename = "Line")]
    line: String,
}

/// A validated dataset row: one edge of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub station: Station,
    pub connected_station: Station,
    pub line: LineLabel,
}

impl EdgeRow {
    /// Create a row from already-validated parts.
    pub fn new(station: Station, connected_station: Station, line: LineLabel) -> Self {
        Self {
            station,
            connected_station,
            line,
        }
    }
}

/// Load the dataset at `path` and build the network from it.
pub fn load_network(path: &Path) -> Result<Network, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_rows(file)?;
    let network = Network::from_rows(rows);

    info!(
        path = %path.display(),
        stations = network.station_count(),
        edges = network.edge_count(),
        components = network.component_count(),
        "Loaded network"
    );

    Ok(network)
}

/// Read and validate all rows from a CSV source.
///
/// Fails if a required column is missing, a record is malformed, or no
/// usable rows remain.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<EdgeRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    for column in [STATION_COLUMN, CONNECTED_COLUMN, LINE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line_number = record.position().map(|p| p.line());
        let raw: RawRow = record.deserialize(Some(&headers))?;

        let (station, connected_station) = match (
            Station::parse(&raw.station),
            Station::parse(&raw.connected_station),
        ) {
            (Ok(a), Ok(b)) => (a, b),
            _ => {
                warn!(line = ?line_number, "Skipping row with a blank station");
                continue;
            }
        };

        rows.push(EdgeRow::new(
            station,
            connected_station,
            LineLabel::normalize(&raw.line),
        ));
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    #[test]
    fn reads_rows_and_normalizes_lines() {
        let csv = "Station,Connected_Station,Line\n\
                   A,B,  red line \n\
                   B,C,BLUE LINE\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station, station("A"));
        assert_eq!(rows[0].connected_station, station("B"));
        assert_eq!(rows[0].line.as_str(), "Red Line");
        assert_eq!(rows[1].line.as_str(), "Blue Line");
    }

    #[test]
    fn column_order_and_extra_columns_are_free() {
        let csv = "Line,Distance,Connected_Station,Station\n\
                   green line,1.2,B,A\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station, station("A"));
        assert_eq!(rows[0].connected_station, station("B"));
        assert_eq!(rows[0].line.as_str(), "Green Line");
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let csv = " Station , Connected_Station , Line \nA,B,Red\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn station_names_are_trimmed() {
        let csv = "Station,Connected_Station,Line\n  A ,\tB,Red\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].station, station("A"));
        assert_eq!(rows[0].connected_station, station("B"));
    }

    #[test]
    fn missing_column_is_rejected() {
        let csv = "Station,Line\nA,Red\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Connected_Station")));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "Station,Connected_Station,Line\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn blank_input_is_empty() {
        let err = read_rows("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn blank_station_rows_are_skipped() {
        let csv = "Station,Connected_Station,Line\n\
                   A,B,Red\n\
                   ,C,Red\n\
                   D,  ,Red\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn only_blank_station_rows_is_empty() {
        let csv = "Station,Connected_Station,Line\n,B,Red\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn blank_line_label_is_kept() {
        let csv = "Station,Connected_Station,Line\nA,B,\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].line.as_str(), "");
    }

    #[test]
    fn ragged_record_is_an_error() {
        let csv = "Station,Connected_Station,Line\nA,B,Red\nC,D\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::Csv { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn load_network_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Station,Connected_Station,Line").unwrap();
        writeln!(file, "A,B,red").unwrap();
        writeln!(file, "B,C,red").unwrap();
        writeln!(file, "C,D,blue").unwrap();
        file.flush().unwrap();

        let network = load_network(file.path()).unwrap();
        assert_eq!(network.station_count(), 4);
        assert_eq!(network.edge_count(), 3);
    }

    #[test]
    fn load_network_missing_file() {
        let err = load_network(Path::new("/nonexistent/metro.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
