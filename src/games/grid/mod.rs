//! The literal grid puzzle.
//!
//! - Each row offers `cols` literals over distinct variables
//! - Pick one literal per row, never a variable and its negation
//! - Filling every shown row appends the next one
//! - Filling every row up to the limit wins
//!
//! Once enough literals are selected, new rows are drawn from the
//! negations of the player's own choices.

mod game;

pub use game::{GridStats, LiteralGrid};
