//! Player actions as explicit event records.
//!
//! The front-end never mutates the game directly: a click on a cell becomes
//! `Action::Select { row, literal }`, the "clear all" control becomes
//! `Action::ClearSelections`, and both go through one dispatch function.

use serde::{Deserialize, Serialize};

use super::literal::Literal;

/// A player action.
///
/// ```
/// use literal_grid::core::{Action, Literal};
///
/// let click = Action::select(2, Literal::new(-5));
/// assert_eq!(click.row(), Some(2));
/// assert_eq!(Action::ClearSelections.row(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select `literal` in row `row`.
    Select { row: usize, literal: Literal },
    /// Reset every selection, keeping the rows.
    ClearSelections,
}

impl Action {
    #[must_use]
    pub const fn select(row: usize, literal: Literal) -> Self {
        Action::Select { row, literal }
    }

    /// The row this action addresses, if any.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Action::Select { row, .. } => Some(*row),
            Action::ClearSelections => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select { row, literal } => write!(f, "select {literal} in row {row}"),
            Action::ClearSelections => write!(f, "clear selections"),
        }
    }
}

/// An applied action with metadata for history tracking.
///
/// Used for:
/// - Replaying a game from its seed
/// - Debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position of this action in the game (0-based).
    pub sequence: u32,

    /// Rows on the grid when the action was applied.
    pub rows_shown: usize,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32, rows_shown: usize) -> Self {
        Self {
            action,
            sequence,
            rows_shown,
        }
    }
}
