//! Rules engine trait and the end-of-game state machine.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - When the game is won or the player is stuck

use crate::core::action::Action;
use crate::core::error::GameError;
use crate::core::literal::Literal;
use crate::core::state::{GameState, SelectOutcome};

/// Where the game stands after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Rows remain to be selected.
    InProgress,
    /// Every shown row is selected and the row limit is not reached yet.
    /// The next row is appended as part of the same action.
    AwaitingNextRow,
    /// Every row up to the limit is selected. Terminal.
    Won,
    /// All rows are shown and no unselected row has a literal that can be
    /// selected. Advisory only: the player may clear or change selections.
    PossibleForfeit,
}

impl GameStatus {
    /// True if no further actions are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won)
    }

    /// Player-facing message for this status, if any.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::Won => Some("You win!"),
            GameStatus::PossibleForfeit => Some("Do you forfeit?"),
            GameStatus::InProgress | GameStatus::AwaitingNextRow => None,
        }
    }
}

/// Effect of one successfully applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Selection result for `Action::Select`, `None` for other actions.
    pub outcome: Option<SelectOutcome>,
    /// Index of the row appended because every shown row was selected.
    pub row_added: Option<usize>,
    /// Status after the action, including any appended row.
    pub status: GameStatus,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must leave the state untouched when it returns an error
/// - `apply_action` must be deterministic given the state's RNG
/// - `status` is a pure function of the state
pub trait RulesEngine {
    /// Current status of the game.
    fn status(&self, state: &GameState) -> GameStatus;

    /// Apply an action and run the state machine.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<Transition, GameError>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.status(state).is_terminal()
    }

    /// Enumerate the actions that would currently succeed.
    ///
    /// Empty once the game is won.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }

        let mut actions = vec![Action::ClearSelections];
        for (row, cells) in state.grid_rows().iter().enumerate() {
            actions.extend(
                cells
                    .iter()
                    .copied()
                    .filter(|&lit: &Literal| state.is_valid_selection(lit))
                    .map(|literal| Action::select(row, literal)),
            );
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::Won.message(), Some("You win!"));
        assert_eq!(GameStatus::PossibleForfeit.message(), Some("Do you forfeit?"));
        assert_eq!(GameStatus::InProgress.message(), None);
        assert_eq!(GameStatus::AwaitingNextRow.message(), None);
    }

    #[test]
    fn test_only_won_is_terminal() {
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::PossibleForfeit.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(!GameStatus::AwaitingNextRow.is_terminal());
    }
}
