//! Simulation control: modes, host events, the controller state machine,
//! and the snapshot view returned to hosts.
//!
//! ## Example Usage
//!
//! ```
//! use rust_life::core::{Density, SimulationConfig};
//! use rust_life::sim::{SimEvent, SimulationController, SimulationMode};
//!
//! let mut sim = SimulationController::new(SimulationConfig::default()).unwrap();
//! sim.handle(SimEvent::SelectDensity(Density::MEDIUM)).unwrap();
//! sim.handle(SimEvent::ToggleRun).unwrap();
//! assert_eq!(sim.mode(), SimulationMode::Running);
//!
//! // Once per host frame
//! sim.handle(SimEvent::Tick).unwrap();
//! assert_eq!(sim.generation(), 1);
//!
//! let view = sim.snapshot();
//! assert!(view.cells.iter().all(|c| c.in_bounds(16)));
//! ```

mod controller;
mod event;
mod snapshot;

pub use controller::SimulationController;
pub use event::{SimEvent, SimulationMode};
pub use snapshot::Snapshot;
