//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::{Interchange, Itinerary, StationStop};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Source station name
    #[serde(default)]
    pub source: String,

    /// Destination station name
    #[serde(default)]
    pub destination: String,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Source station name
    pub source: String,

    /// Destination station name
    pub destination: String,

    /// Number of stops travelled
    pub stops: usize,

    /// Estimated travel time in minutes
    pub estimated_time_mins: i64,

    /// Stations in travel order
    pub stations: Vec<StopResult>,

    /// Line changes, in travel order
    pub interchanges: Vec<InterchangeResult>,
}

/// A station on a route.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Station name
    pub station: String,

    /// Line in effect at this station ("N/A" if unresolved)
    pub line: String,

    /// Line category (e.g. "blue", "unknown")
    pub category: &'static str,

    /// Display marker for the line
    pub marker: &'static str,
}

/// A change of line.
#[derive(Debug, Serialize)]
pub struct InterchangeResult {
    /// Station where the change happens
    pub station: String,

    /// Line arrived on
    pub from_line: String,

    /// Line departed on
    pub to_line: String,

    /// Category of the line arrived on
    pub from_category: &'static str,

    /// Category of the line departed on
    pub to_category: &'static str,
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Station names, sorted
    pub stations: Vec<String>,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (case-insensitive substring)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Query for the map view's search box.
#[derive(Debug, Deserialize)]
pub struct MapRequest {
    #[serde(default)]
    pub q: String,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching station names, sorted
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error kind
    pub kind: &'static str,
}

// Conversion implementations

impl RouteResponse {
    /// Create from a planned itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            source: itinerary.route.source().to_string(),
            destination: itinerary.route.destination().to_string(),
            stops: itinerary.stops(),
            estimated_time_mins: itinerary.estimated_time.num_minutes(),
            stations: itinerary
                .path
                .stops
                .iter()
                .map(StopResult::from_stop)
                .collect(),
            interchanges: itinerary
                .interchanges()
                .iter()
                .map(InterchangeResult::from_interchange)
                .collect(),
        }
    }
}

impl StopResult {
    /// Create from an annotated station.
    pub fn from_stop(stop: &StationStop) -> Self {
        let category = stop.category();
        Self {
            station: stop.station.to_string(),
            line: stop.line_name().to_string(),
            category: category.as_str(),
            marker: category.marker(),
        }
    }
}

impl InterchangeResult {
    /// Create from a domain Interchange.
    pub fn from_interchange(interchange: &Interchange) -> Self {
        Self {
            station: interchange.station.to_string(),
            from_line: interchange.from_line.to_string(),
            to_line: interchange.to_line.to_string(),
            from_category: interchange.from_line.category().as_str(),
            to_category: interchange.to_line.category().as_str(),
        }
    }
}

impl StationListResponse {
    /// Create from station names.
    pub fn from_stations<'a>(stations: impl Iterator<Item = &'a Station>) -> Self {
        Self {
            stations: stations.map(Station::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineLabel;
    use crate::network::{EdgeRow, Network};
    use crate::planner::{Planner, PlannerConfig};

    fn network(edges: &[(&str, &str, &str)]) -> Network {
        Network::from_rows(edges.iter().map(|(a, b, line)| {
            EdgeRow::new(
                Station::parse(a).unwrap(),
                Station::parse(b).unwrap(),
                LineLabel::normalize(line),
            )
        }))
    }

    #[test]
    fn route_response_from_itinerary() {
        let net = network(&[
            ("A", "B", "red line"),
            ("B", "C", "red line"),
            ("C", "D", "blue line"),
        ]);
        let config = PlannerConfig::default();
        let itinerary = Planner::new(&net, &config).plan("A", "D").unwrap();

        let response = RouteResponse::from_itinerary(&itinerary);
        assert_eq!(response.source, "A");
        assert_eq!(response.destination, "D");
        assert_eq!(response.stops, 3);
        assert_eq!(response.estimated_time_mins, 6);
        assert_eq!(response.stations.len(), 4);
        assert_eq!(response.stations[3].line, "Blue Line");
        assert_eq!(response.stations[3].category, "blue");
        assert_eq!(response.stations[3].marker, "🔵");
        assert_eq!(response.interchanges.len(), 1);
        assert_eq!(response.interchanges[0].station, "C");
        assert_eq!(response.interchanges[0].from_category, "red");
        assert_eq!(response.interchanges[0].to_category, "blue");
    }

    #[test]
    fn route_response_serializes() {
        let net = network(&[("A", "B", "rapid metro")]);
        let config = PlannerConfig::default();
        let itinerary = Planner::new(&net, &config).plan("B", "A").unwrap();

        let json = serde_json::to_value(RouteResponse::from_itinerary(&itinerary)).unwrap();
        assert_eq!(json["stops"], 1);
        assert_eq!(json["estimated_time_mins"], 2);
        assert_eq!(json["stations"][0]["station"], "B");
        assert_eq!(json["stations"][0]["line"], "Rapid Metro");
        assert_eq!(json["stations"][0]["category"], "unknown");
        assert_eq!(json["interchanges"], serde_json::json!([]));
    }

    #[test]
    fn station_list_is_sorted() {
        let net = network(&[("Zeta", "Alpha", "red"), ("Mid", "Alpha", "red")]);
        let response = StationListResponse::from_stations(net.stations());
        assert_eq!(response.stations, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn route_request_fields_default_to_empty() {
        let req: RouteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.source.is_empty());
        assert!(req.destination.is_empty());
    }
}
