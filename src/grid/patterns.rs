//! Small catalogue of well-known patterns.
//!
//! Hosts and tests use these to seed deterministic layouts instead of a
//! random fill.

use crate::core::Cell;

/// A named still life, oscillator or spaceship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// 2×2 still life.
    Block,
    /// Vertical line of three; period-2 oscillator.
    Blinker,
    /// Period-2 oscillator spanning 4×2.
    Toad,
    /// The smallest spaceship; moves one cell diagonally every 4 generations.
    Glider,
}

impl Pattern {
    /// Every pattern in the catalogue.
    pub const ALL: [Pattern; 4] = [Pattern::Block, Pattern::Blinker, Pattern::Toad, Pattern::Glider];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Glider => "Glider",
        }
    }

    /// Live cells relative to the pattern's top-left corner.
    #[must_use]
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Live cells with the top-left corner placed at `origin`.
    pub fn cells_at(self, origin: Cell) -> impl Iterator<Item = Cell> {
        self.offsets().iter().map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Period of the pattern: generations until it repeats (in place for
    /// oscillators, shifted for spaceships).
    #[must_use]
    pub fn period(self) -> u32 {
        match self {
            Pattern::Block => 1,
            Pattern::Blinker | Pattern::Toad => 2,
            Pattern::Glider => 4,
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
