//! # rust-life
//!
//! A deterministic simulation core for Conway's Game of Life on a bounded
//! square grid, with a small state machine for configuring and running it.
//!
//! ## Design Principles
//!
//! 1. **Immutable Generations**: each tick produces a fresh `GridState`;
//!    the transition only ever reads the previous generation.
//!
//! 2. **Injected Randomness**: initial layouts come from an explicit,
//!    seedable `LifeRng`, so every run is reproducible.
//!
//! 3. **Host Agnostic**: rendering, input and frame pacing live in the
//!    host. The core takes events and hands back read-only views.
//!
//! ## Modules
//!
//! - `core`: Cells, densities, RNG, configuration, errors
//! - `grid`: Live-cell state, Moore neighborhood, named patterns
//! - `rules`: Transition rule trait and the generation step
//! - `sim`: Simulation controller, host events, snapshots

pub mod core;
pub mod grid;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{Cell, Density, LifeError, LifeRng, LifeRngState, SimulationConfig};

pub use crate::grid::{count_live_neighbors, neighbors, GridState, LiveSet, Pattern};

pub use crate::rules::{step, step_n, step_with, ConwayRule, TransitionRule};

pub use crate::sim::{SimEvent, SimulationController, SimulationMode, Snapshot};
