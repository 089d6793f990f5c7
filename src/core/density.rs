//! Grid density: the side length of the square grid.
//!
//! Only a small fixed set of densities is supported. Values outside it are
//! rejected when a `Density` is constructed, so everything downstream can
//! treat a `Density` as valid.

use serde::{Deserialize, Serialize};

use super::error::LifeError;

/// Side length of the square grid, restricted to [`Density::SUPPORTED`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Density(u32);

impl Density {
    /// 8×8 grid.
    pub const SMALL: Density = Density(8);
    /// 16×16 grid.
    pub const MEDIUM: Density = Density(16);
    /// 32×32 grid.
    pub const LARGE: Density = Density(32);

    /// Every supported density, smallest first.
    pub const SUPPORTED: [Density; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];

    /// Density selected before the user picks one.
    pub const DEFAULT: Density = Self::SMALL;

    /// Validate a side length against the supported set.
    pub fn new(side: u32) -> Result<Self, LifeError> {
        Self::SUPPORTED
            .into_iter()
            .find(|d| d.0 == side)
            .ok_or(LifeError::UnsupportedDensity(side))
    }

    /// Side length in cells.
    #[must_use]
    pub const fn side(self) -> u32 {
        self.0
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub const fn area(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Host key binding: `1`, `2`, `3` select small, medium, large.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::SMALL),
            '2' => Some(Self::MEDIUM),
            '3' => Some(Self::LARGE),
            _ => None,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Density {
    type Error = LifeError;

    fn try_from(side: u32) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<Density> for u32 {
    fn from(density: Density) -> Self {
        density.0
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_values() {
        for side in [8, 16, 32] {
            assert_eq!(Density::new(side).unwrap().side(), side);
        }
    }

    #[test]
    fn test_rejects_unsupported() {
        for side in [0, 1, 7, 9, 24, 64] {
            assert!(matches!(
                Density::new(side),
                Err(LifeError::UnsupportedDensity(s)) if s == side
            ));
        }
    }

    #[test]
    fn test_default_is_small() {
        assert_eq!(Density::default(), Density::SMALL);
        assert_eq!(Density::default().side(), 8);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Density::from_key('1'), Some(Density::SMALL));
        assert_eq!(Density::from_key('2'), Some(Density::MEDIUM));
        assert_eq!(Density::from_key('3'), Some(Density::LARGE));
        assert_eq!(Density::from_key('4'), None);
    }

    #[test]
    fn test_display_and_area() {
        assert_eq!(format!("{}", Density::MEDIUM), "16x16");
        assert_eq!(Density::LARGE.area(), 1024);
    }

    #[test]
    fn test_serde_validates() {
        let density: Density = serde_json::from_str("16").unwrap();
        assert_eq!(density, Density::MEDIUM);
        assert_eq!(serde_json::to_string(&density).unwrap(), "16");

        assert!(serde_json::from_str::<Density>("12").is_err());
    }
}
