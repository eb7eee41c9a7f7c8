//! # literal-grid
//!
//! A deduction puzzle over signed literals.
//!
//! Each row of the grid offers a few literals (a variable or its negation).
//! The player picks one literal per row and may never pick both a variable
//! and its negation anywhere on the grid. Filling every shown row reveals the
//! next one; filling every row up to the limit wins. Once the player has
//! committed to a few literals, new rows are drawn from their negations.
//!
//! ## Modules
//!
//! - `core`: Literals, configuration, RNG, actions, game state, errors
//! - `rules`: `RulesEngine` trait and the end-of-game state machine
//! - `games`: The `LiteralGrid` rules
//! - `ui`: Terminal renderer and transient message line
//!
//! ## Example
//!
//! ```
//! use literal_grid::{Action, LiteralGrid, PuzzleConfig, RulesEngine};
//!
//! let (mut game, mut state) = LiteralGrid::start(PuzzleConfig::new().with_seed(7)).unwrap();
//! let first = state.grid_rows()[0][0];
//!
//! let transition = game.apply_action(&mut state, &Action::select(0, first)).unwrap();
//! assert_eq!(state.selection(0), Some(first));
//! assert!(!transition.status.is_terminal());
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Literal, VariableId,
    PuzzleConfig, Rgb,
    GameRng,
    Action, ActionRecord,
    ConfigError, GameError, SelectionError, ZeroLiteral,
    GameState, Row, SelectOutcome,
};

pub use crate::rules::{GameStatus, RulesEngine, Transition};

pub use crate::games::{GridStats, LiteralGrid};

pub use crate::ui::{MessageBoard, Renderer, View};
