//! Domain types for the metro route finder.
//!
//! Station names and line labels are validated and normalized at
//! construction time, so code that receives these types can compare them
//! directly.

mod line;
mod station;

pub use line::{LineCategory, LineLabel, NO_LINE, title_case};
pub use station::{InvalidStation, Station};
