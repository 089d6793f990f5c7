//! Grid state and neighborhood queries.
//!
//! - `GridState`: immutable live-cell set for one generation
//! - `neighbors` / `count_live_neighbors`: clipped Moore neighborhood
//! - `Pattern`: named seed layouts

mod neighbors;
mod patterns;
mod state;

pub use neighbors::{count_live_neighbors, neighbors};
pub use patterns::Pattern;
pub use state::{FxBuildHasher, GridState, LiveSet};
