//! Askama templates for the web frontend.

use askama::Template;
use chrono::Duration;

use crate::network::Network;
use crate::planner::{Interchange, Itinerary, StationStop};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Route finder page with the station selects.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
    pub summary: Option<NetworkSummary>,
    pub load_error: Option<String>,
}

/// Route finder page showing a planned route or the reason there isn't one.
#[derive(Template)]
#[template(path = "route.html")]
pub struct RouteTemplate {
    pub stations: Vec<StationOption>,
    pub itinerary: Option<ItineraryView>,
    pub error: Option<String>,
}

/// Map view with a station search box.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub map_available: bool,
    pub query: String,
    pub matches: Vec<String>,
    pub load_error: Option<String>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// An entry in a station select.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub name: String,
    pub selected_source: bool,
    pub selected_destination: bool,
}

impl StationOption {
    /// All stations in the network, marking the current selections.
    pub fn list(network: &Network, source: &str, destination: &str) -> Vec<Self> {
        let (source, destination) = (source.trim(), destination.trim());
        network
            .stations()
            .map(|station| StationOption {
                name: station.to_string(),
                selected_source: station.as_str() == source,
                selected_destination: station.as_str() == destination,
            })
            .collect()
    }
}

/// Size of the loaded network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub stations: usize,
    pub edges: usize,
    pub components: usize,
}

impl NetworkSummary {
    pub fn from_network(network: &Network) -> Self {
        Self {
            stations: network.station_count(),
            edges: network.edge_count(),
            components: network.component_count(),
        }
    }
}

/// A planned route, ready for display.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub source: String,
    pub destination: String,
    pub stops: usize,
    pub estimated_time: String,
    pub stations: Vec<StopView>,
    pub interchanges: Vec<InterchangeView>,
}

impl ItineraryView {
    /// Create from a planned itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            source: itinerary.route.source().to_string(),
            destination: itinerary.route.destination().to_string(),
            stops: itinerary.stops(),
            estimated_time: format_duration(itinerary.estimated_time),
            stations: itinerary
                .path
                .stops
                .iter()
                .enumerate()
                .map(|(i, stop)| StopView::from_stop(i + 1, stop))
                .collect(),
            interchanges: itinerary
                .interchanges()
                .iter()
                .map(InterchangeView::from_interchange)
                .collect(),
        }
    }
}

/// One numbered station on a displayed route.
#[derive(Debug, Clone)]
pub struct StopView {
    pub number: usize,
    pub name: String,
    pub line: String,
    pub marker: &'static str,
    pub colour: &'static str,
}

impl StopView {
    pub fn from_stop(number: usize, stop: &StationStop) -> Self {
        let category = stop.category();
        Self {
            number,
            name: stop.station.to_string(),
            line: stop.line_name().to_string(),
            marker: category.marker(),
            colour: category.colour(),
        }
    }
}

/// A change of line on a displayed route.
#[derive(Debug, Clone)]
pub struct InterchangeView {
    pub station: String,
    pub from_line: String,
    pub from_marker: &'static str,
    pub to_line: String,
    pub to_marker: &'static str,
}

impl InterchangeView {
    pub fn from_interchange(interchange: &Interchange) -> Self {
        Self {
            station: interchange.station.to_string(),
            from_line: interchange.from_line.to_string(),
            from_marker: interchange.from_line.category().marker(),
            to_line: interchange.to_line.to_string(),
            to_marker: interchange.to_line.category().marker(),
        }
    }
}

/// Format a travel time, e.g. "14 minutes" or "1h 4m".
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_minutes();
    match (total / 60, total % 60) {
        (0, 1) => "1 minute".to_string(),
        (0, mins) => format!("{mins} minutes"),
        (hours, mins) => format!("{hours}h {mins}m"),
    }
}
