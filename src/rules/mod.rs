//! Transition rules and the generation step.
//!
//! A `TransitionRule` decides a cell's next state from its current state
//! and live-neighbor count. The transition engine applies a rule to every
//! cell of the grid against the previous generation only.
//!
//! The engine never interprets cell semantics beyond "alive" and a count,
//! so alternative life-like rules plug in without touching the step.

mod transition;

pub use transition::{step, step_n, step_with, ConwayRule, TransitionRule};
