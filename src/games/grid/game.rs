//! Literal grid rules.

use log::{debug, info};

use crate::core::{Action, ActionRecord, ConfigError, GameError, GameState, PuzzleConfig};
use crate::rules::{GameStatus, RulesEngine, Transition};

/// Counters over the actions dispatched to a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    /// Successful selections, replacements included.
    pub selections: u32,
    /// Selections rejected for any reason.
    pub rejections: u32,
    pub clears: u32,
    /// Rows appended after the initial ones.
    pub rows_added: u32,
}

/// The literal grid game.
///
/// Holds no puzzle data; everything lives in `GameState`.
#[derive(Clone, Debug, Default)]
pub struct LiteralGrid {
    stats: GridStats,
}

impl LiteralGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the rules and a fresh game from `config`.
    pub fn start(config: PuzzleConfig) -> Result<(LiteralGrid, GameState), ConfigError> {
        let state = GameState::new(config)?;
        Ok((LiteralGrid::new(), state))
    }

    /// Rebuild a generated game from its config, seed and recorded actions.
    ///
    /// Rows are regenerated from the seed, so this only reproduces games
    /// created with `GameState::new`.
    pub fn replay<'a>(
        config: PuzzleConfig,
        seed: u64,
        actions: impl IntoIterator<Item = &'a ActionRecord>,
    ) -> Result<(LiteralGrid, GameState), GameError> {
        let (mut game, mut state) = Self::start(config.with_seed(seed))?;
        for record in actions {
            game.apply_action(&mut state, &record.action)?;
        }
        Ok((game, state))
    }

    #[must_use]
    pub fn stats(&self) -> GridStats {
        self.stats
    }

    fn record(state: &mut GameState, action: Action) {
        let record = ActionRecord::new(action, state.next_sequence(), state.rows_shown());
        state.record_action(record);
    }

    /// Append a row if every shown row is selected and the limit allows it.
    fn advance(&mut self, state: &mut GameState) -> Option<usize> {
        if self.status(state) != GameStatus::AwaitingNextRow {
            return None;
        }
        let index = state.add_row();
        self.stats.rows_added += 1;
        debug!("all rows selected, added row {} of {}", index + 1, state.config().rows);
        Some(index)
    }
}

impl RulesEngine for LiteralGrid {
    fn status(&self, state: &GameState) -> GameStatus {
        if state.all_selections_done() {
            if state.at_row_limit() {
                GameStatus::Won
            } else {
                GameStatus::AwaitingNextRow
            }
        } else if state.at_row_limit() && !state.has_valid_move() {
            GameStatus::PossibleForfeit
        } else {
            GameStatus::InProgress
        }
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<Transition, GameError> {
        if self.is_terminal(state) {
            return Err(GameError::GameOver);
        }

        let (outcome, row_added) = match *action {
            Action::Select { row, literal } => {
                let outcome = match state.select_literal(row, literal) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        self.stats.rejections += 1;
                        debug!("rejected {}: {}", action, err);
                        return Err(err.into());
                    }
                };
                self.stats.selections += 1;
                Self::record(state, *action);
                (Some(outcome), self.advance(state))
            }
            Action::ClearSelections => {
                state.clear_selections();
                self.stats.clears += 1;
                Self::record(state, *action);
                (None, None)
            }
        };

        let status = self.status(state);
        match status {
            GameStatus::Won => info!("won with {} rows", state.rows_shown()),
            GameStatus::PossibleForfeit => info!("no selectable literal left in any open row"),
            GameStatus::InProgress | GameStatus::AwaitingNextRow => {}
        }

        Ok(Transition {
            outcome,
            row_added,
            status,
        })
    }
}
