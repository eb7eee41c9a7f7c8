//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win and advisory-forfeit conditions
//!
//! Front-ends dispatch `Action` records through `RulesEngine` and never
//! mutate `GameState` directly.

pub mod engine;

pub use engine::{GameStatus, RulesEngine, Transition};
