//! Core puzzle types: literals, configuration, RNG, actions, state, errors.
//!
//! Everything here is independent of how the grid is displayed. Rules live
//! in `rules` and `games`; front-ends live in `ui`.

pub mod literal;
pub mod config;
pub mod rng;
pub mod action;
pub mod error;
pub mod state;

pub use literal::{Literal, VariableId};
pub use config::{PuzzleConfig, Rgb, DEFAULT_PALETTE};
pub use rng::GameRng;
pub use action::{Action, ActionRecord};
pub use error::{ConfigError, GameError, SelectionError, ZeroLiteral};
pub use state::{GameState, Row, SelectOutcome};
