//! Grid state: the live cells of one generation.
//!
//! A `GridState` is an immutable value. Each generation produces a new one
//! wholesale; nothing mutates a state that someone else may be reading.
//!
//! Uses `im` persistent sets so cloning a generation (for snapshots or
//! history in hosts) is O(1), keyed with the Fx hasher for fast lookups.

use im::HashSet as ImHashSet;
use rand::Rng;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use super::patterns::Pattern;
use crate::core::{Cell, LifeError};

/// Hasher used by the live set.
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Set of live cells for one generation.
pub type LiveSet = ImHashSet<Cell, FxBuildHasher>;

/// Live cells on a `side × side` grid.
///
/// ## Invariants
///
/// - Every live cell satisfies `0 <= x < side` and `0 <= y < side`
/// - `population() <= side²`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    side: u32,
    live: LiveSet,
}

impl GridState {
    /// Largest supported side length.
    pub const MAX_SIDE: u32 = 1 << 15;

    /// The zero state: no live cells.
    ///
    /// # Panics
    ///
    /// Panics if `side` is 0 or larger than [`GridState::MAX_SIDE`].
    #[must_use]
    pub fn empty(side: u32) -> Self {
        assert!(side > 0, "Grid side must be at least 1");
        assert!(side <= Self::MAX_SIDE, "Grid side exceeds MAX_SIDE");

        Self {
            side,
            live: LiveSet::default(),
        }
    }

    /// Random layout where each cell is alive with probability 1/2.
    ///
    /// Reproducible for an identically seeded `rng`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(side: u32, rng: &mut R) -> Self {
        Self::random_with_probability(side, 0.5, rng)
    }

    /// Random layout where each cell is independently alive with `probability`.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is not in `[0, 1]`, or on an invalid `side`.
    #[must_use]
    pub fn random_with_probability<R: Rng + ?Sized>(side: u32, probability: f64, rng: &mut R) -> Self {
        let mut state = Self::empty(side);
        state.live = Self::domain(side)
            .filter(|_| rng.gen_bool(probability))
            .collect();
        state
    }

    /// Build a state from explicit live cells.
    ///
    /// Duplicate cells are merged. Returns an error for any cell outside the grid.
    pub fn from_cells(side: u32, cells: impl IntoIterator<Item = Cell>) -> Result<Self, LifeError> {
        let mut state = Self::empty(side);
        for cell in cells {
            if !cell.in_bounds(side) {
                return Err(LifeError::CellOutOfBounds { cell, density: side });
            }
            state.live.insert(cell);
        }
        Ok(state)
    }

    /// Build a state holding a single pattern with its top-left corner at `origin`.
    pub fn with_pattern(side: u32, pattern: Pattern, origin: Cell) -> Result<Self, LifeError> {
        Self::from_cells(side, pattern.cells_at(origin))
    }

    /// Wrap a live set produced by the transition engine.
    ///
    /// Callers guarantee every member is in bounds.
    pub(crate) fn from_live_set(side: u32, live: LiveSet) -> Self {
        debug_assert!(live.iter().all(|c| c.in_bounds(side)));
        Self { side, live }
    }

    /// Every cell of a `side × side` grid, column by column.
    ///
    /// # Panics
    ///
    /// Panics if `side` is larger than [`GridState::MAX_SIDE`].
    pub fn domain(side: u32) -> impl Iterator<Item = Cell> {
        assert!(side <= Self::MAX_SIDE, "Grid side exceeds MAX_SIDE");
        let side = side as i32;
        (0..side).flat_map(move |x| (0..side).map(move |y| Cell::new(x, y)))
    }

    /// Side length of the grid.
    #[must_use]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Check if a cell is alive.
    ///
    /// Cells outside the grid are never alive.
    #[must_use]
    pub fn is_alive(&self, cell: Cell) -> bool {
        cell.in_bounds(self.side) && self.live.contains(&cell)
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Check if no cell is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate over live cells (no meaningful order).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Live cells in row-major order.
    #[must_use]
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells().collect();
        cells.sort_unstable();
        cells
    }

    /// The underlying live set.
    #[must_use]
    pub fn live_set(&self) -> &LiveSet {
        &self.live
    }
}

/// Text rendering: one row per line, `#` alive, `.` dead.
impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side as i32;
        for y in 0..side {
            for x in 0..side {
                let c = if self.is_alive(Cell::new(x, y)) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
