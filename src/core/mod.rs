//! Core types: cells, densities, RNG, configuration, errors.
//!
//! This module contains the value types shared by the grid, the rules and
//! the controller. None of them know about rendering or input.

pub mod cell;
pub mod density;
pub mod rng;
pub mod config;
pub mod error;

pub use cell::Cell;
pub use density::Density;
pub use rng::{LifeRng, LifeRngState};
pub use config::SimulationConfig;
pub use error::LifeError;
