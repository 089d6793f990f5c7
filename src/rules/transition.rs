//! Generation transition.

use crate::grid::{count_live_neighbors, GridState, LiveSet};

/// Rule deciding whether a cell is alive in the next generation.
///
/// ## Implementation Notes
///
/// - Must be a pure function of its arguments
/// - `live_neighbors` is always in `0..=8`
pub trait TransitionRule {
    /// Next state of a cell that is currently `alive` with `live_neighbors` live neighbors.
    fn next_alive(&self, alive: bool, live_neighbors: u8) -> bool;
}

/// Conway's standard rule, B3/S23.
///
/// - Live cell with 2 or 3 live neighbors survives
/// - Dead cell with exactly 3 live neighbors is born
/// - Every other cell is dead in the next generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl TransitionRule for ConwayRule {
    fn next_alive(&self, alive: bool, live_neighbors: u8) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }
}

/// Compute the next generation under Conway's rule.
#[must_use]
pub fn step(state: &GridState) -> GridState {
    step_with(state, &ConwayRule)
}

/// Compute the next generation under `rule`.
///
/// Every cell of the grid is evaluated against `state` only, never against
/// the partially built output, so evaluation order does not matter.
/// O(side²) cells, each with up to 8 hashed lookups.
#[must_use]
pub fn step_with<R: TransitionRule + ?Sized>(state: &GridState, rule: &R) -> GridState {
    let side = state.side();
    let live: LiveSet = GridState::domain(side)
        .filter(|&cell| rule.next_alive(state.is_alive(cell), count_live_neighbors(state, cell)))
        .collect();

    GridState::from_live_set(side, live)
}

/// Apply `step` `generations` times.
#[must_use]
pub fn step_n(state: &GridState, generations: u64) -> GridState {
    let mut current = state.clone();
    for _ in 0..generations {
        current = step(&current);
    }
    current
}
