//! Shortest-route search.
//!
//! Every edge costs one stop, so a breadth-first search from the source
//! finds a route with the fewest stops. Neighbours are expanded in sorted
//! order; which of several equally short routes is returned is not part
//! of the contract.

use std::collections::{HashMap, VecDeque};

use chrono::Duration;
use tracing::debug;

use crate::domain::Station;
use crate::network::Network;

use super::annotate::{AnnotatedPath, Interchange, annotate};
use super::config::PlannerConfig;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Source and destination are the same station
    #[error("source and destination cannot be the same ({0})")]
    SameStation(String),

    /// A requested station is not in the network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The stations are in disconnected parts of the network
    #[error("no path found between {from} and {to}")]
    NoPath { from: Station, to: Station },
}

/// A route through the network: stations from source to destination,
/// both included. Consecutive stations are adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Station>,
}

impl Route {
    /// Stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// First station.
    pub fn source(&self) -> &Station {
        &self.stations[0]
    }

    /// Last station.
    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of stops travelled (edges traversed).
    pub fn stops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Estimated travel time under the given configuration.
    pub fn estimated_time(&self, config: &PlannerConfig) -> Duration {
        config.estimated_time(self.stops())
    }
}

/// Find a route with the fewest stops between two stations.
///
/// Station names are matched after trimming whitespace. The same-station
/// check comes before any lookup, so `find_route(n, x, x)` is always
/// [`RouteError::SameStation`].
pub fn find_route(
    network: &Network,
    source: &str,
    destination: &str,
) -> Result<Route, RouteError> {
    let source = source.trim();
    let destination = destination.trim();

    if source == destination {
        return Err(RouteError::SameStation(source.to_string()));
    }

    let start = network
        .station(source)
        .ok_or_else(|| RouteError::UnknownStation(source.to_string()))?;
    let goal = network
        .station(destination)
        .ok_or_else(|| RouteError::UnknownStation(destination.to_string()))?;

    // Station → the station it was first reached from.
    let mut parents: HashMap<&Station, &Station> = HashMap::new();
    let mut queue: VecDeque<&Station> = VecDeque::from([start]);
    let mut visited = 1;

    'search: while let Some(station) = queue.pop_front() {
        for next in network.neighbours(station.as_str()) {
            if next == start || parents.contains_key(next) {
                continue;
            }
            parents.insert(next, station);
            visited += 1;

            if next == goal {
                break 'search;
            }
            queue.push_back(next);
        }
    }

    if !parents.contains_key(goal) {
        debug!(from = %start, to = %goal, visited, "No path");
        return Err(RouteError::NoPath {
            from: start.clone(),
            to: goal.clone(),
        });
    }

    let mut stations = vec![goal.clone()];
    let mut current = goal;
    while let Some(&parent) = parents.get(current) {
        stations.push(parent.clone());
        current = parent;
    }
    stations.reverse();

    debug!(
        from = %start,
        to = %goal,
        stops = stations.len() - 1,
        visited,
        "Route found"
    );

    Ok(Route { stations })
}

/// A planned route with its annotations and travel estimate.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub route: Route,
    pub path: AnnotatedPath,
    pub estimated_time: Duration,
}

impl Itinerary {
    /// Number of stops travelled.
    pub fn stops(&self) -> usize {
        self.route.stops()
    }

    /// Line changes along the route, in travel order.
    pub fn interchanges(&self) -> &[Interchange] {
        &self.path.interchanges
    }
}

/// Route planner over a loaded network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Find and annotate a route between two stations.
    ///
    /// Annotation only runs once a route has been found.
    pub fn plan(&self, source: &str, destination: &str) -> Result<Itinerary, RouteError> {
        let route = find_route(self.network, source, destination)?;
        let path = annotate(self.network, &route);
        let estimated_time = route.estimated_time(self.config);

        Ok(Itinerary {
            route,
            path,
            estimated_time,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::LineLabel;
    use crate::network::EdgeRow;
    use proptest::prelude::*;

    const NODES: usize = 10;

    fn name(i: usize) -> String {
        format!("S{i}")
    }

    /// Reference all-pairs hop distances by Floyd–Warshall.
    fn reference_distances(edges: &[(usize, usize)]) -> Vec<Vec<Option<usize>>> {
        let mut dist = vec![vec![None; NODES]; NODES];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for &(a, b) in edges {
            if a != b {
                dist[a][b] = Some(1);
                dist[b][a] = Some(1);
            }
        }
        for k in 0..NODES {
            for i in 0..NODES {
                for j in 0..NODES {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        let through = ik + kj;
                        if dist[i][j].is_none_or(|d| through < d) {
                            dist[i][j] = Some(through);
                        }
                    }
                }
            }
        }
        dist
    }

    fn build(edges: &[(usize, usize)]) -> Network {
        Network::from_rows(edges.iter().map(|&(a, b)| {
            EdgeRow::new(
                Station::parse(&name(a)).unwrap(),
                Station::parse(&name(b)).unwrap(),
                LineLabel::normalize("red line"),
            )
        }))
    }

    proptest! {
        /// Route length matches the reference shortest distance, and a
        /// missing path is reported as NoPath
        #[test]
        fn route_is_shortest(
            edges in proptest::collection::vec((0..NODES, 0..NODES), 1..25),
            from in 0..NODES,
            to in 0..NODES,
        ) {
            let net = build(&edges);
            let dist = reference_distances(&edges);
            let (source, destination) = (name(from), name(to));

            let in_network = net.contains(&source) && net.contains(&destination);
            match find_route(&net, &source, &destination) {
                Ok(route) => {
                    prop_assert_eq!(Some(route.stops()), dist[from][to]);
                    prop_assert_eq!(route.source().as_str(), source.as_str());
                    prop_assert_eq!(route.destination().as_str(), destination.as_str());
                    for pair in route.stations().windows(2) {
                        prop_assert!(net.is_adjacent(pair[0].as_str(), pair[1].as_str()));
                    }
                }
                Err(RouteError::SameStation(_)) => prop_assert_eq!(from, to),
                Err(RouteError::UnknownStation(_)) => prop_assert!(!in_network),
                Err(RouteError::NoPath { .. }) => {
                    prop_assert!(in_network);
                    prop_assert_eq!(dist[from][to], None);
                }
            }
        }

        /// The same station is always rejected
        #[test]
        fn same_station_always_rejected(
            edges in proptest::collection::vec((0..NODES, 0..NODES), 1..25),
            at in 0..NODES,
        ) {
            let net = build(&edges);
            let station = name(at);
            prop_assert_eq!(
                find_route(&net, &station, &station),
                Err(RouteError::SameStation(station.clone()))
            );
        }
    }
}
