//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::network::{LoadError, Network};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Holds the network loaded at startup, or the reason it could not be
/// loaded. Nothing in here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    /// The loaded network, or the load failure
    pub network: Arc<Result<Network, LoadError>>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,

    /// Location of the static map image
    pub map_path: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Result<Network, LoadError>,
        config: PlannerConfig,
        map_path: PathBuf,
    ) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            map_path: Arc::new(map_path),
        }
    }

    /// The loaded network, if loading succeeded.
    pub fn network(&self) -> Result<&Network, &LoadError> {
        (*self.network).as_ref()
    }

    /// Whether the map image exists on disk.
    pub fn map_available(&self) -> bool {
        self.map_path.is_file()
    }
}
