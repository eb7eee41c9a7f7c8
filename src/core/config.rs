//! Puzzle configuration.
//!
//! `PuzzleConfig` carries every tunable of a game: grid size, number of
//! variables, the colour palette, and the thresholds that switch literal
//! generation into its biased mode. Build one with the `with_*` methods and
//! call `validate()` (or let `GameState::new` do it).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::literal::VariableId;

/// Default palette, one high-contrast colour per variable.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#e6194B", "#f58231", "#ffe119", "#bfef45", "#3cb44b", "#4363d8", "#911eb4", "#808000",
    "#800000", "#a9a9a9",
];

/// An RGB colour parsed from a `#rrggbb` palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` string (case-insensitive).
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Total row limit. Filling every row at the limit wins the game.
    pub rows: usize,

    /// Literals per row.
    pub cols: usize,

    /// Number of distinct variables (`1..=num_variables`).
    pub num_variables: u32,

    /// Rows generated at startup.
    pub initial_rows: usize,

    /// `#rrggbb` colour per variable; variable `v` uses entry `v - 1`.
    pub palette: Vec<String>,

    /// Biased generation needs at least this many rows on the grid...
    pub bias_min_rows: usize,

    /// ...and at least this many distinct selected literals.
    pub bias_min_selected: usize,

    /// How long a transient message stays visible, in milliseconds.
    pub message_timeout_ms: u64,

    /// RNG seed. `None` draws one from the OS at startup.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 3,
            num_variables: 10,
            initial_rows: 3,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            bias_min_rows: 5,
            bias_min_selected: 3,
            message_timeout_ms: 1200,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_variables(mut self, num_variables: u32) -> Self {
        self.num_variables = num_variables;
        self
    }

    #[must_use]
    pub fn with_initial_rows(mut self, initial_rows: usize) -> Self {
        self.initial_rows = initial_rows;
        self
    }

    #[must_use]
    pub fn with_palette<S: Into<String>>(mut self, palette: impl IntoIterator<Item = S>) -> Self {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Set the thresholds for biased literal generation.
    #[must_use]
    pub fn with_bias(mut self, min_rows: usize, min_selected: usize) -> Self {
        self.bias_min_rows = min_rows;
        self.bias_min_selected = min_selected;
        self
    }

    #[must_use]
    pub fn with_message_timeout_ms(mut self, ms: u64) -> Self {
        self.message_timeout_ms = ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.initial_rows == 0 {
            return Err(ConfigError::NoInitialRows);
        }
        if self.initial_rows > self.rows {
            return Err(ConfigError::InitialRowsExceedLimit {
                initial: self.initial_rows,
                rows: self.rows,
            });
        }
        if (self.num_variables as usize) < self.cols {
            return Err(ConfigError::TooFewVariables {
                variables: self.num_variables,
                cols: self.cols,
            });
        }
        let max = i32::MAX as u32;
        if self.num_variables > max {
            return Err(ConfigError::TooManyVariables {
                variables: self.num_variables,
                max,
            });
        }
        if self.palette.len() < self.num_variables as usize {
            return Err(ConfigError::PaletteTooSmall {
                colors: self.palette.len(),
                variables: self.num_variables,
            });
        }
        if let Some((index, color)) = self
            .palette
            .iter()
            .enumerate()
            .find(|(_, c)| Rgb::parse_hex(c).is_none())
        {
            return Err(ConfigError::InvalidColor {
                index,
                color: color.clone(),
            });
        }
        Ok(())
    }

    /// Palette colour for a variable, if the palette covers it.
    #[must_use]
    pub fn color_of(&self, variable: VariableId) -> Option<Rgb> {
        self.palette
            .get(variable.index())
            .and_then(|c| Rgb::parse_hex(c))
    }

    /// Message timeout as a `Duration`.
    #[must_use]
    pub fn message_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.message_timeout_ms)
    }
}
