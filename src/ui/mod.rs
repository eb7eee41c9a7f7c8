//! Terminal front-end: grid rendering and the transient message line.
//!
//! The front-end owns no game state. It reads `GameState` to draw and turns
//! player input into `Action` records for the rules engine.

pub mod message;
pub mod render;

pub use message::MessageBoard;
pub use render::{Renderer, View};
