//! Terminal rendering of the grid.
//!
//! The renderer holds only display options. Every frame is produced from a
//! `GameState` borrowed for the duration of the render:
//!
//! ```text
//!      0    1    2
//!  0  [O3]  X7   O1
//!  1   X2   O5   X9
//!
//! Rows left: 19
//! ```
//!
//! Positive literals are drawn as `O`, negative as `X`, followed by the
//! variable number. The selected cell of a row is bracketed. With colour on,
//! each cell's background is its variable's palette colour.

use std::fmt;

use crate::core::{GameState, Literal, Rgb};

const RESET: &str = "\x1b[0m";

/// Display options for the terminal view.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    #[must_use]
    pub fn color(&self) -> bool {
        self.color
    }

    /// A displayable frame of `state` with an optional message line.
    #[must_use]
    pub fn view<'a>(&self, state: &'a GameState, message: Option<&'a str>) -> View<'a> {
        View {
            renderer: *self,
            state,
            message,
        }
    }

    fn write_cell(
        &self,
        f: &mut fmt::Formatter<'_>,
        state: &GameState,
        literal: Literal,
        selected: bool,
    ) -> fmt::Result {
        let glyph = if literal.is_positive() { 'O' } else { 'X' };
        let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
        let label = format!("{open}{glyph}{}{close}", literal.variable().raw());

        match state.config().color_of(literal.variable()).filter(|_| self.color) {
            Some(bg) => {
                let fg = contrasting(bg);
                write!(
                    f,
                    "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{label:<5}{RESET}",
                    bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
                )
            }
            None => write!(f, "{label:<5}"),
        }
    }
}

/// Black or white, whichever reads better on `bg`.
fn contrasting(bg: Rgb) -> Rgb {
    let luma = 299 * u32::from(bg.r) + 587 * u32::from(bg.g) + 114 * u32::from(bg.b);
    if luma > 128_000 {
        Rgb { r: 0, g: 0, b: 0 }
    } else {
        Rgb { r: 255, g: 255, b: 255 }
    }
}

/// One rendered frame.
pub struct View<'a> {
    renderer: Renderer,
    state: &'a GameState,
    message: Option<&'a str>,
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let row_width = state.rows_shown().saturating_sub(1).to_string().len().max(2);

        write!(f, "{:>w$}  ", "", w = row_width)?;
        for col in 0..state.config().cols {
            write!(f, " {col:<4}")?;
        }
        writeln!(f)?;

        for (index, row) in state.grid_rows().iter().enumerate() {
            write!(f, "{index:>row_width$}  ")?;
            let selected = state.selection(index);
            for &literal in row {
                self.renderer
                    .write_cell(f, state, literal, selected == Some(literal))?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Rows left: {}", state.remaining())?;
        if let Some(message) = self.message {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleConfig;

    fn state() -> GameState {
        let rows = vec![
            vec![Literal::new(3), Literal::new(-7), Literal::new(1)],
            vec![Literal::new(-2), Literal::new(5), Literal::new(-9)],
        ];
        GameState::from_rows(PuzzleConfig::new().with_seed(1), rows).unwrap()
    }

    #[test]
    fn test_plain_frame() {
        let mut state = state();
        state.select_literal(0, Literal::new(3)).unwrap();

        let frame = Renderer::new(false).view(&state, None).to_string();
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines[1].trim_end(), " 0  [O3]  X7   O1");
        assert_eq!(lines[2].trim_end(), " 1   X2   O5   X9");
        assert!(frame.contains("Rows left: 19"));
        assert!(!frame.contains('\x1b'));
    }

    #[test]
    fn test_message_line() {
        let state = state();
        let frame = Renderer::new(false).view(&state, Some("Invalid selection")).to_string();
        assert_eq!(frame.lines().last(), Some("Invalid selection"));
    }

    #[test]
    fn test_colored_cells_use_palette() {
        let state = state();
        let frame = Renderer::default().view(&state, None).to_string();

        // Variable 3 is "#ffe119"; light background gets black text.
        assert!(frame.contains("\x1b[48;2;255;225;25m\x1b[38;2;0;0;0m O3"));
        // Variable 9 is "#800000"; dark background gets white text.
        assert!(frame.contains("\x1b[48;2;128;0;0m\x1b[38;2;255;255;255m X9"));
        assert!(frame.contains(RESET));
    }

    #[test]
    fn test_contrasting() {
        assert_eq!(contrasting(Rgb { r: 255, g: 255, b: 255 }), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(contrasting(Rgb { r: 0, g: 0, b: 0 }), Rgb { r: 255, g: 255, b: 255 });
    }
}
