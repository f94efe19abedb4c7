//! Station table loading
//!
//! Builds a [`Network`] from a CSV table of stations. Rows are ordered;
//! consecutive rows sharing a `line` value are adjacent stations, and the
//! loader links them as neighbors with directed edges in both directions as
//! it walks the rows. A station serving several lines appears once per line
//! and its rows merge through the upsert.
//!
//! Expected columns: `id`, `name`, `line`, `x`, `y`. The Spanish headers
//! `nombre` and `linea` used by Metro de Madrid station tables are accepted
//! as aliases.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{RamalError, Result};
use crate::geometry::Coordinate;
use crate::network::Network;

/// One row of the station table
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    /// Sequence order within the table
    pub id: u64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "linea")]
    pub line: String,
    pub x: f64,
    pub y: f64,
}

impl StationRecord {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// Load a network from a station table on disk.
///
/// A missing file is `DataNotFound`; a row that fails to parse is
/// `InvalidRecord` with the offending line number.
pub fn load_network(path: &Path) -> Result<Network> {
    if !path.exists() {
        return Err(RamalError::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<StationRecord>() {
        records.push(row.map_err(invalid_record)?);
    }
    debug!(rows = records.len(), path = %path.display(), "station table read");

    build_network(&records)
}

/// Build a network from already-parsed records.
///
/// A name seen again with the same coordinate is the transfer-station case
/// and merges; a name seen again with a *different* coordinate is a
/// validation failure, reported rather than silently overwritten.
pub fn build_network(records: &[StationRecord]) -> Result<Network> {
    let mut network = Network::new();

    for (index, record) in records.iter().enumerate() {
        let coordinate = record.coordinate();
        if let Some(existing) = network.station(&record.name) {
            if existing.coordinate != coordinate {
                return Err(RamalError::ConflictingCoordinates {
                    name: record.name.clone(),
                    id: record.id,
                });
            }
        }

        let mut neighbors = Vec::new();
        if let Some(next) = records.get(index + 1) {
            if next.line == record.line {
                network.create_edge(&record.name, &next.name, coordinate, next.coordinate());
                neighbors.push(next.name.clone());
            }
        }
        if index > 0 {
            let previous = &records[index - 1];
            if previous.line == record.line {
                network.create_edge(
                    &record.name,
                    &previous.name,
                    coordinate,
                    previous.coordinate(),
                );
                neighbors.push(previous.name.clone());
            }
        }

        network.upsert_station(&record.name, neighbors, coordinate);
    }

    debug!(
        stations = network.len(),
        edges = network.edge_count(),
        "network built"
    );
    Ok(network)
}

fn invalid_record(err: csv::Error) -> RamalError {
    let line = err.position().map_or(0, csv::Position::line);
    RamalError::InvalidRecord {
        line,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_from_str(contents: &str) -> Result<Network> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        load_network(file.path())
    }

    const TWO_LINES: &str = "\
id,name,line,x,y
0,NORTE,1,0.0,8.0
1,CENTRO,1,0.0,4.0
2,SUR,1,0.0,0.0
3,OESTE,2,-4.0,4.0
4,CENTRO,2,0.0,4.0
5,ESTE,2,4.0,4.0
";

    #[test]
    fn links_consecutive_same_line_rows() {
        let network = load_from_str(TWO_LINES).unwrap();

        assert_eq!(network.len(), 5);
        assert_eq!(network.station("NORTE").unwrap().neighbors, vec!["CENTRO"]);
        assert_eq!(
            network.station("SUR").unwrap().neighbors,
            vec!["CENTRO"]
        );
        // Edges exist in both directions with the same distance
        assert_eq!(network.edge_distance("NORTE", "CENTRO"), Some(4.0));
        assert_eq!(network.edge_distance("CENTRO", "NORTE"), Some(4.0));
        // Line boundaries do not link: SUR ends line 1, OESTE starts line 2
        assert_eq!(network.edge_distance("SUR", "OESTE"), None);
    }

    #[test]
    fn transfer_station_rows_merge() {
        let network = load_from_str(TWO_LINES).unwrap();

        // CENTRO appears on both lines; rows merge into one station holding
        // the neighbor pairs of each line in row order
        let centro = network.station("CENTRO").unwrap();
        assert_eq!(centro.coordinate, Coordinate::new(0.0, 4.0));
        assert_eq!(centro.neighbors, vec!["SUR", "NORTE", "ESTE", "OESTE"]);
    }

    #[test]
    fn spanish_headers_are_accepted() {
        let network = load_from_str(
            "id,nombre,linea,x,y\n0,SOL,1,0.0,0.0\n1,GOYA,1,3.0,0.0\n",
        )
        .unwrap();

        assert_eq!(network.len(), 2);
        assert_eq!(network.edge_distance("SOL", "GOYA"), Some(3.0));
    }

    #[test]
    fn missing_file_is_data_not_found() {
        let err = load_network(Path::new("/no/such/stations.csv")).unwrap_err();
        assert!(matches!(err, RamalError::DataNotFound { .. }));
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let err = load_from_str("id,name,line,x,y\n0,SOL,1,0.0,0.0\n1,GOYA,1,not-a-number,0.0\n")
            .unwrap_err();

        match err {
            RamalError::InvalidRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("invalid"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn conflicting_duplicate_coordinates_are_rejected() {
        let err = load_from_str(
            "id,name,line,x,y\n0,SOL,1,0.0,0.0\n1,GOYA,1,3.0,0.0\n2,SOL,2,9.0,9.0\n",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RamalError::ConflictingCoordinates { name, id } if name == "SOL" && id == 2
        ));
    }

    #[test]
    fn loaded_network_routes_across_a_transfer() {
        let network = load_from_str(TWO_LINES).unwrap();
        let route = crate::route::shortest_route(&network, "NORTE", "ESTE").unwrap();
        assert_eq!(route.stations, vec!["NORTE", "CENTRO", "ESTE"]);
        assert_eq!(route.total_distance, 8.0);
    }
}
