//! Route planning over the metro network.
//!
//! Finds the route with the fewest stops between two stations using
//! breadth-first search, then annotates it with the line taken on each
//! hop and the interchanges where the line changes.

mod annotate;
mod config;
mod search;

pub use annotate::{AnnotatedPath, Hop, Interchange, StationStop, annotate};
pub use config::PlannerConfig;
pub use search::{Itinerary, Planner, Route, RouteError, find_route};
