//! Web layer for the metro route finder.
//!
//! Serves the route finder and map pages, plus a small JSON API over the
//! loaded network.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
