//! Game state: the literal pool, the grid, and the per-row selections.
//!
//! ## Lifecycle
//!
//! - The literal pool is built once (`+v, -v` for every variable).
//! - `grid_rows` and `selections` grow together, one entry per `add_row`.
//!   Rows are never removed.
//! - `clear_selections` resets every selection to `None` and keeps the rows.
//!
//! ## Consistency
//!
//! No two selections may be negations of each other. `select_literal` is the
//! only way to set a selection and it enforces this through
//! `is_valid_selection`.

use im::Vector;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::PuzzleConfig;
use super::error::{ConfigError, SelectionError};
use super::literal::{Literal, VariableId};
use super::rng::GameRng;

/// One row of literal choices. No two literals share a variable.
pub type Row = SmallVec<[Literal; 4]>;

/// Rejected draws tolerated for one slot before falling back to the
/// literals whose variable is still free in the row.
const MAX_DRAW_ATTEMPTS: usize = 64;

/// Result of a successful `select_literal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The row had no selection.
    Selected,
    /// The row's previous selection was replaced.
    Replaced { previous: Literal },
}

/// Complete puzzle state.
///
/// Owned by the caller and handed to the renderer by reference.
#[derive(Clone, Debug)]
pub struct GameState {
    config: PuzzleConfig,

    /// `+1, -1, +2, -2, ...` for every configured variable.
    literal_pool: Vec<Literal>,

    grid_rows: Vec<Row>,

    /// Index-aligned with `grid_rows`.
    selections: Vec<Option<Literal>>,

    /// Deterministic RNG for literal generation.
    pub rng: GameRng,

    /// Applied actions, in order.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Validate `config`, build the literal pool and generate the initial rows.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        let mut state = Self::empty(config)?;
        for _ in 0..state.config.initial_rows {
            state.add_row();
        }
        Ok(state)
    }

    /// Start from a fixed set of rows instead of generated ones.
    ///
    /// Later rows are still generated. Each row must hold exactly `cols`
    /// literals over distinct, configured variables.
    pub fn from_rows(
        config: PuzzleConfig,
        rows: impl IntoIterator<Item = Vec<Literal>>,
    ) -> Result<Self, ConfigError> {
        let mut state = Self::empty(config)?;
        for (index, literals) in rows.into_iter().enumerate() {
            state.check_row(index, &literals)?;
            state.push_row(Row::from_vec(literals));
        }
        if state.grid_rows.is_empty() {
            return Err(ConfigError::NoInitialRows);
        }
        Ok(state)
    }

    fn empty(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("new puzzle: {} variables, seed {}", config.num_variables, rng.seed());

        let literal_pool = VariableId::all(config.num_variables)
            .flat_map(|v| [v.positive(), v.negative()])
            .collect();

        Ok(Self {
            literal_pool,
            grid_rows: Vec::with_capacity(config.rows),
            selections: Vec::with_capacity(config.rows),
            rng,
            history: Vector::new(),
            config,
        })
    }

    fn check_row(&self, index: usize, literals: &[Literal]) -> Result<(), ConfigError> {
        if index >= self.config.rows {
            return Err(ConfigError::TooManyRows {
                count: index + 1,
                rows: self.config.rows,
            });
        }
        if literals.len() != self.config.cols {
            return Err(ConfigError::RowWidth {
                index,
                len: literals.len(),
                cols: self.config.cols,
            });
        }
        let mut seen = FxHashSet::default();
        for &literal in literals {
            if literal.variable().raw() > self.config.num_variables {
                return Err(ConfigError::UnknownVariable { index, literal });
            }
            if !seen.insert(literal.variable()) {
                return Err(ConfigError::DuplicateVariable {
                    index,
                    variable: literal.variable(),
                });
            }
        }
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Seed of the RNG this game started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn literal_pool(&self) -> &[Literal] {
        &self.literal_pool
    }

    #[must_use]
    pub fn grid_rows(&self) -> &[Row] {
        &self.grid_rows
    }

    #[must_use]
    pub fn selections(&self) -> &[Option<Literal>] {
        &self.selections
    }

    /// Get a row by index.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.grid_rows.get(index)
    }

    /// Get the selection of a row. `None` for unselected or missing rows.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<Literal> {
        self.selections.get(index).copied().flatten()
    }

    /// Number of rows currently on the grid.
    #[must_use]
    pub fn rows_shown(&self) -> usize {
        self.grid_rows.len()
    }

    /// True once the grid holds the configured row limit.
    #[must_use]
    pub fn at_row_limit(&self) -> bool {
        self.grid_rows.len() >= self.config.rows
    }

    /// Number of rows with a selection.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Rows still to be selected before the game is won, counting rows
    /// that have not been generated yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.config.rows.saturating_sub(self.selected_count())
    }

    /// Indices of rows without a selection.
    pub fn unselected_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.selections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
    }

    /// Distinct selected literals, in row order of first appearance.
    #[must_use]
    pub fn distinct_selected(&self) -> Vec<Literal> {
        let mut seen = FxHashSet::default();
        self.selections
            .iter()
            .flatten()
            .copied()
            .filter(|lit| seen.insert(*lit))
            .collect()
    }

    // === Generation ===

    /// Draw a literal for a new row.
    ///
    /// Once the grid has `bias_min_rows` rows and the player has selected
    /// `bias_min_selected` distinct literals, returns the negation of a
    /// uniformly chosen selected literal. Otherwise returns a uniformly chosen
    /// literal from the pool.
    pub fn pick_literal(&mut self) -> Literal {
        let selected = self.distinct_selected();
        let biased = !selected.is_empty()
            && self.grid_rows.len() >= self.config.bias_min_rows
            && selected.len() >= self.config.bias_min_selected;

        if biased {
            let literal = selected[self.rng.gen_index(selected.len())].negate();
            debug!("biased draw {} from {} selected literals", literal, selected.len());
            literal
        } else {
            self.literal_pool[self.rng.gen_index(self.literal_pool.len())]
        }
    }

    /// Generate a row of `cols` literals over distinct variables and append
    /// it with no selection. Returns the new row's index.
    pub fn add_row(&mut self) -> usize {
        let mut row = Row::with_capacity(self.config.cols);
        while row.len() < self.config.cols {
            let literal = self.draw_for_row(&row);
            row.push(literal);
        }
        debug!("row {}: {:?}", self.grid_rows.len(), row.as_slice());
        self.push_row(row)
    }

    fn draw_for_row(&mut self, row: &Row) -> Literal {
        let taken = |lit: Literal| row.iter().any(|l| l.variable() == lit.variable());

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let literal = self.pick_literal();
            if !taken(literal) {
                return literal;
            }
        }

        // The biased candidates can span fewer variables than a row needs.
        let free: Vec<Literal> = self
            .literal_pool
            .iter()
            .copied()
            .filter(|&lit| !taken(lit))
            .collect();
        warn!(
            "{} draws rejected for row {}, using {} free literals",
            MAX_DRAW_ATTEMPTS,
            self.grid_rows.len(),
            free.len()
        );
        // Non-empty: validate() guarantees num_variables >= cols.
        free[self.rng.gen_index(free.len())]
    }

    fn push_row(&mut self, row: Row) -> usize {
        self.grid_rows.push(row);
        self.selections.push(None);
        self.grid_rows.len() - 1
    }

    // === Selection ===

    /// False iff the negation of `candidate` is already selected.
    #[must_use]
    pub fn is_valid_selection(&self, candidate: Literal) -> bool {
        !self
            .selections
            .iter()
            .flatten()
            .any(|selected| selected.conflicts_with(candidate))
    }

    /// Select `literal` in row `row`.
    ///
    /// A row's existing selection may be replaced by any literal of that row
    /// that passes `is_valid_selection`. Nothing changes on error.
    pub fn select_literal(
        &mut self,
        row: usize,
        literal: Literal,
    ) -> Result<SelectOutcome, SelectionError> {
        let cells = self.grid_rows.get(row).ok_or(SelectionError::RowOutOfRange {
            row,
            rows: self.grid_rows.len(),
        })?;
        if !cells.contains(&literal) {
            return Err(SelectionError::NotInRow { row, literal });
        }
        if !self.is_valid_selection(literal) {
            return Err(SelectionError::Conflict { literal });
        }

        Ok(match self.selections[row].replace(literal) {
            Some(previous) => SelectOutcome::Replaced { previous },
            None => SelectOutcome::Selected,
        })
    }

    /// True iff every row has a selection.
    #[must_use]
    pub fn all_selections_done(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Reset every selection to `None`. Rows are kept.
    pub fn clear_selections(&mut self) {
        self.selections.iter_mut().for_each(|s| *s = None);
    }

    /// True iff some unselected row offers a literal that passes
    /// `is_valid_selection`.
    #[must_use]
    pub fn has_valid_move(&self) -> bool {
        self.unselected_rows().any(|i| {
            self.grid_rows[i]
                .iter()
                .any(|&lit| self.is_valid_selection(lit))
        })
    }

    // === Action History ===

    /// Record an applied action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Sequence number for the next recorded action.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
