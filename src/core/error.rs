//! Error types for configuration, selection and game dispatch.

use thiserror::Error;

use super::literal::{Literal, VariableId};

/// Zero has no variable, so it is not a literal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("literal must be non-zero")]
pub struct ZeroLiteral;

/// Rejected puzzle configuration.
///
/// Row construction needs at least `cols` distinct variables, so an
/// inconsistent configuration fails here instead of looping in `add_row`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("row limit must be at least 1")]
    NoRows,
    #[error("rows must hold at least one literal")]
    NoColumns,
    #[error("at least one initial row is required")]
    NoInitialRows,
    #[error("initial row count {initial} exceeds the row limit {rows}")]
    InitialRowsExceedLimit { initial: usize, rows: usize },
    #[error("{variables} variables cannot fill rows of {cols} distinct variables")]
    TooFewVariables { variables: u32, cols: usize },
    #[error("{variables} variables exceed the supported maximum of {max}")]
    TooManyVariables { variables: u32, max: u32 },
    #[error("palette has {colors} colors but {variables} variables need one each")]
    PaletteTooSmall { colors: usize, variables: u32 },
    #[error("palette entry {index} ({color:?}) is not a #rrggbb color")]
    InvalidColor { index: usize, color: String },
    #[error("{count} rows given but the row limit is {rows}")]
    TooManyRows { count: usize, rows: usize },
    #[error("row {index} has {len} literals, expected {cols}")]
    RowWidth { index: usize, len: usize, cols: usize },
    #[error("row {index} repeats variable {variable}")]
    DuplicateVariable { index: usize, variable: VariableId },
    #[error("row {index} uses {literal}, outside the configured variables")]
    UnknownVariable { index: usize, literal: Literal },
}

/// Rejected literal selection. The game state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The negation of the literal is already selected in some row.
    #[error("invalid selection: {literal} conflicts with a selected {}", .literal.negate())]
    Conflict { literal: Literal },
    #[error("row {row} does not exist ({rows} rows shown)")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("literal {literal} is not in row {row}")]
    NotInRow { row: usize, literal: Literal },
}

/// Error returned when dispatching an action to the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("the game is already won")]
    GameOver,
}

impl GameError {
    /// True for a cross-row conflict, the only error the player can cause
    /// by clicking a visible literal.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, GameError::Selection(SelectionError::Conflict { .. }))
    }
}
