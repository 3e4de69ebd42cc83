//! Undirected station graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::domain::{LineLabel, Station};

use super::loader::EdgeRow;

/// The transit network: an undirected graph of stations whose edges carry
/// line labels.
///
/// Built once from the dataset and read-only afterwards. Stations are kept
/// in sorted order, which makes neighbour iteration deterministic.
///
/// A pair of stations may be joined by several rows with different labels.
/// Every distinct label is kept, in the order the rows appeared.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Station → (neighbour → labels of the edges between them).
    /// Stored in both directions.
    adjacency: BTreeMap<Station, BTreeMap<Station, Vec<LineLabel>>>,

    /// Number of distinct (pair, label) edges.
    edge_count: usize,
}

impl Network {
    /// Build a network from validated dataset rows.
    pub fn from_rows(rows: impl IntoIterator<Item = EdgeRow>) -> Self {
        let mut builder = NetworkBuilder::new();
        for row in rows {
            builder.add_edge(row.station, row.connected_station, row.line);
        }
        builder.build()
    }

    /// All stations, sorted and without duplicates.
    pub fn stations(&self) -> impl ExactSizeIterator<Item = &Station> {
        self.adjacency.keys()
    }

    /// Check whether a station exists in the network.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.adjacency.get_key_value(name).map(|(station, _)| station)
    }

    /// Stations directly connected to `station`, in sorted order.
    ///
    /// Returns an empty iterator for unknown stations.
    pub fn neighbours<'a>(
        &'a self,
        station: &str,
    ) -> impl Iterator<Item = &'a Station> + use<'a> {
        self.adjacency
            .get(station)
            .into_iter()
            .flat_map(|edges| edges.keys())
    }

    /// Labels of the edges between two stations, in dataset order.
    ///
    /// Order of the two stations does not matter. Returns an empty slice
    /// when they are not adjacent.
    pub fn labels_between(&self, a: &str, b: &str) -> &[LineLabel] {
        self.adjacency
            .get(a)
            .and_then(|edges| edges.get(b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stations whose name contains `query`, ignoring case, in sorted order.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.adjacency
            .keys()
            .filter(|station| station.as_str().to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Check whether two stations are directly connected.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        !self.labels_between(a, b).is_empty()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct labelled edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let mut seen: BTreeSet<&Station> = BTreeSet::new();
        let mut components = 0;

        for start in self.adjacency.keys() {
            if !seen.insert(start) {
                continue;
            }
            components += 1;

            let mut queue = VecDeque::from([start]);
            while let Some(station) = queue.pop_front() {
                for next in self.neighbours(station.as_str()) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        components
    }
}

/// Incremental builder for a [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge between two stations.
    ///
    /// Both stations are created if needed. Returns false if the same pair
    /// already carries this label, in which case nothing changes.
    pub fn add_edge(&mut self, a: Station, b: Station, line: LineLabel) -> bool {
        let forward = self
            .inner
            .adjacency
            .entry(a.clone())
            .or_default()
            .entry(b.clone())
            .or_default();

        if forward.contains(&line) {
            return false;
        }
        forward.push(line.clone());

        // A self-loop shares one label list; don't record it twice.
        if a != b {
            self.inner
                .adjacency
                .entry(b)
                .or_default()
                .entry(a)
                .or_default()
                .push(line);
        }

        self.inner.edge_count += 1;
        true
    }

    /// Finish building.
    pub fn build(self) -> Network {
        self.inner
    }
}
