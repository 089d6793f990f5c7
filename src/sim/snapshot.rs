//! Read-only view handed to the renderer.

use serde::{Deserialize, Serialize};

use super::event::SimulationMode;
use crate::core::{Cell, Density};

/// Owned copy of the controller state for one frame.
///
/// Hosts should take a fresh snapshot each frame rather than keep one
/// across ticks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: SimulationMode,
    pub density: Density,
    pub generation: u64,
    pub population: usize,
    /// Live cells in row-major order.
    pub cells: Vec<Cell>,
}

impl Snapshot {
    /// Overlay text for the current mode, one entry per line.
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        match self.mode {
            SimulationMode::Running => vec![
                format!("Generation: {}", self.generation),
                format!("Grid Size: {}", self.density),
            ],
            SimulationMode::Configuring => vec![
                "press 1, 2, or 3 for small, medium, or large grids".to_string(),
                "press space to start/stop simulation".to_string(),
                format!("Selected Grid Size: {}", self.density),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(mode: SimulationMode) -> Snapshot {
        Snapshot {
            mode,
            density: Density::MEDIUM,
            generation: 12,
            population: 1,
            cells: vec![Cell::new(4, 5)],
        }
    }

    #[test]
    fn test_status_lines_running() {
        let lines = snapshot(SimulationMode::Running).status_lines();
        assert_eq!(lines, vec!["Generation: 12", "Grid Size: 16x16"]);
    }

    #[test]
    fn test_status_lines_configuring() {
        let lines = snapshot(SimulationMode::Configuring).status_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Selected Grid Size: 16x16");
    }

    #[test]
    fn test_serde() {
        let original = snapshot(SimulationMode::Running);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
