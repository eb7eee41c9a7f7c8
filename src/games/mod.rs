//! Game implementations on top of the core state and `RulesEngine`.

pub mod grid;

pub use grid::{GridStats, LiteralGrid};
