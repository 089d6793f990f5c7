//! Simulation modes and host events.

use serde::{Deserialize, Serialize};

use crate::core::Density;

/// Whether the simulation is being configured or running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationMode {
    /// Choosing a density; no generations are computed.
    #[default]
    Configuring,
    /// Advancing one generation per tick.
    Running,
}

impl SimulationMode {
    /// Check if the simulation is running.
    #[must_use]
    pub fn is_running(self) -> bool {
        self == SimulationMode::Running
    }
}

impl std::fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationMode::Configuring => f.write_str("Configuring"),
            SimulationMode::Running => f.write_str("Running"),
        }
    }
}

/// Event fed into the controller by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimEvent {
    /// Choose the grid density. Ignored while running.
    SelectDensity(Density),
    /// Start a run, or stop the current one.
    ToggleRun,
    /// One host frame. Advances a generation while running.
    Tick,
}

impl SimEvent {
    /// Host key binding: `1`/`2`/`3` select a density, space toggles the run.
    ///
    /// Returns `None` for unbound keys.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' => Some(SimEvent::ToggleRun),
            _ => Density::from_key(key).map(SimEvent::SelectDensity),
        }
    }
}
