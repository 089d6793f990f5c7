//! Crate error type.

use thiserror::Error;

use super::cell::Cell;

/// Errors raised at the boundary of the simulation core.
///
/// Out-of-range lookups and mode-mismatched events are not errors; they
/// resolve to "not alive" and no-ops respectively.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A grid side length outside the supported set.
    #[error("unsupported grid density {0}")]
    UnsupportedDensity(u32),

    /// A density the active configuration does not allow.
    #[error("grid density {0} is not enabled by the configuration")]
    DensityNotEnabled(u32),

    /// A cell supplied for construction lies outside the grid.
    #[error("cell {cell} is outside a {density}x{density} grid")]
    CellOutOfBounds { cell: Cell, density: u32 },

    /// An invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A configuration document that could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
