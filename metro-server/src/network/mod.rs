//! Transit network loading and graph construction.
//!
//! The dataset is read once at startup into an immutable [`Network`],
//! which request handlers share read-only.

mod error;
mod graph;
mod loader;

pub use error::LoadError;
pub use graph::{Network, NetworkBuilder};
pub use loader::{EdgeRow, load_network, read_rows};
