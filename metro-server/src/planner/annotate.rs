//! Route annotation: line labels per hop and per station, and the
//! interchanges between them.
//!
//! An interchange is reported wherever the label of the hop into a station
//! differs from the label of the hop out of it. The comparison is purely
//! local: two different services that share a label look like one line.

use crate::domain::{LineCategory, LineLabel, NO_LINE, Station};
use crate::network::Network;

use super::search::Route;

/// One hop of a route, between two adjacent stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: Station,
    pub to: Station,
    /// Label of the edge travelled, if the network knows the pair.
    pub line: Option<LineLabel>,
}

/// A station on an annotated route with the line in effect there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStop {
    pub station: Station,
    /// Incoming hop's label; the outgoing hop's for the first station.
    pub line: Option<LineLabel>,
}

impl StationStop {
    /// Line label for display, "N/A" when unresolved.
    pub fn line_name(&self) -> &str {
        self.line.as_ref().map_or(NO_LINE, LineLabel::as_str)
    }

    /// Display category of the line.
    pub fn category(&self) -> LineCategory {
        self.line
            .as_ref()
            .map_or(LineCategory::Unknown, LineLabel::category)
    }
}

/// A change of line at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interchange {
    pub station: Station,
    pub from_line: LineLabel,
    pub to_line: LineLabel,
}

/// A route with line information resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedPath {
    pub stops: Vec<StationStop>,
    pub hops: Vec<Hop>,
    pub interchanges: Vec<Interchange>,
}

/// Resolve line labels along a route and find its interchanges.
pub fn annotate(network: &Network, route: &Route) -> AnnotatedPath {
    annotate_stations(network, route.stations())
}

fn annotate_stations(network: &Network, stations: &[Station]) -> AnnotatedPath {
    let candidates: Vec<&[LineLabel]> = stations
        .windows(2)
        .map(|pair| network.labels_between(pair[0].as_str(), pair[1].as_str()))
        .collect();
    let chosen = choose_labels(&candidates);

    let hops: Vec<Hop> = stations
        .windows(2)
        .zip(chosen)
        .map(|(pair, line)| Hop {
            from: pair[0].clone(),
            to: pair[1].clone(),
            line: line.cloned(),
        })
        .collect();

    let stops = stations
        .iter()
        .enumerate()
        .map(|(i, station)| {
            let hop = if i == 0 { hops.first() } else { hops.get(i - 1) };
            StationStop {
                station: station.clone(),
                line: hop.and_then(|h| h.line.clone()),
            }
        })
        .collect();

    let interchanges = hops
        .windows(2)
        .filter_map(|pair| match (&pair[0].line, &pair[1].line) {
            (Some(before), Some(after)) if before != after => Some(Interchange {
                station: pair[0].to.clone(),
                from_line: before.clone(),
                to_line: after.clone(),
            }),
            _ => None,
        })
        .collect();

    AnnotatedPath {
        stops,
        hops,
        interchanges,
    }
}

/// Pick one label per hop from each hop's candidates.
///
/// Most pairs carry a single label. Where a pair carries several, the
/// assignment with the fewest label changes wins, ties going to the label
/// listed first. A hop with no candidates gets `None` and splits the route
/// into independent runs.
fn choose_labels<'n>(candidates: &[&'n [LineLabel]]) -> Vec<Option<&'n LineLabel>> {
    // costs[i][k]: fewest changes up to hop i when hop i uses candidates[i][k].
    // back[i][k]: candidate index at hop i-1 achieving that cost.
    let mut costs: Vec<Vec<usize>> = Vec::with_capacity(candidates.len());
    let mut back: Vec<Vec<usize>> = Vec::with_capacity(candidates.len());

    for (i, labels) in candidates.iter().enumerate() {
        let previous = i
            .checked_sub(1)
            .map(|p| (candidates[p], &costs[p]))
            .filter(|(prev_labels, _)| !prev_labels.is_empty());

        let (row_costs, row_back): (Vec<usize>, Vec<usize>) = labels
            .iter()
            .map(|label| match previous {
                None => (0, 0),
                Some((prev_labels, prev_costs)) => prev_labels
                    .iter()
                    .zip(prev_costs.iter())
                    .enumerate()
                    .map(|(k, (prev, cost))| (cost + usize::from(prev != label), k))
                    .min_by_key(|&(cost, _)| cost)
                    .unwrap_or((0, 0)),
            })
            .unzip();

        costs.push(row_costs);
        back.push(row_back);
    }

    let mut chosen = vec![None; candidates.len()];
    let mut next_pick: Option<usize> = None;

    for i in (0..candidates.len()).rev() {
        if candidates[i].is_empty() {
            next_pick = None;
            continue;
        }

        let k = next_pick.unwrap_or_else(|| cheapest(&costs[i]));
        chosen[i] = Some(&candidates[i][k]);

        next_pick = match i.checked_sub(1) {
            Some(p) if !candidates[p].is_empty() => Some(back[i][k]),
            _ => None,
        };
    }

    chosen
}

/// Index of the first minimum.
fn cheapest(costs: &[usize]) -> usize {
    costs
        .iter()
        .enumerate()
        .min_by_key(|&(_, cost)| cost)
        .map_or(0, |(k, _)| k)
}
