//! Moore neighborhood counting.
//!
//! Edges are hard walls: there is no wrap-around, so border cells simply
//! have fewer neighbors (5 on an edge, 3 in a corner, 8 in the interior).

use smallvec::SmallVec;

use super::state::GridState;
use crate::core::Cell;

/// Offsets of the 8 Moore neighbors, excluding `(0, 0)`.
#[rustfmt::skip]
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// In-bounds Moore neighbors of `cell` on a `side × side` grid.
#[must_use]
pub fn neighbors(side: u32, cell: Cell) -> SmallVec<[Cell; 8]> {
    MOORE_OFFSETS
        .iter()
        .map(|&(dx, dy)| cell.offset(dx, dy))
        .filter(|n| n.in_bounds(side))
        .collect()
}

/// Number of live Moore neighbors of `cell` in `state` (0..=8).
#[must_use]
pub fn count_live_neighbors(state: &GridState, cell: Cell) -> u8 {
    neighbors(state.side(), cell)
        .iter()
        .filter(|&&n| state.is_alive(n))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_has_eight() {
        let n = neighbors(8, Cell::new(3, 3));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(3, 3)));
        assert!(!n.spilled());
    }

    #[test]
    fn test_corners_have_three() {
        for corner in [Cell::new(0, 0), Cell::new(7, 0), Cell::new(0, 7), Cell::new(7, 7)] {
            assert_eq!(neighbors(8, corner).len(), 3, "corner {corner}");
        }
    }

    #[test]
    fn test_edges_have_five() {
        for edge in [Cell::new(3, 0), Cell::new(0, 3), Cell::new(7, 4), Cell::new(4, 7)] {
            assert_eq!(neighbors(8, edge).len(), 5, "edge {edge}");
        }
    }

    #[test]
    fn test_single_cell_grid() {
        assert!(neighbors(1, Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_neighbors_are_in_bounds() {
        for cell in GridState::domain(4) {
            assert!(neighbors(4, cell).iter().all(|n| n.in_bounds(4)));
        }
    }

    #[test]
    fn test_count_live_neighbors() {
        let state = GridState::from_cells(
            8,
            [Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(5, 5)],
        )
        .unwrap();

        assert_eq!(count_live_neighbors(&state, Cell::new(1, 1)), 3);
        // A live cell does not count itself
        assert_eq!(count_live_neighbors(&state, Cell::new(0, 0)), 2);
        assert_eq!(count_live_neighbors(&state, Cell::new(5, 5)), 0);
        assert_eq!(count_live_neighbors(&state, Cell::new(4, 4)), 1);
    }

    #[test]
    fn test_count_matches_neighbor_list() {
        let state = GridState::from_cells(3, GridState::domain(3)).unwrap();
        for cell in GridState::domain(3) {
            assert_eq!(
                count_live_neighbors(&state, cell) as usize,
                neighbors(3, cell).len()
            );
        }
    }
}
