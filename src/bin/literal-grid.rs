use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info};

use literal_grid::{
    Action, GameError, GameState, GameStatus, LiteralGrid, MessageBoard, PuzzleConfig, Renderer,
    RulesEngine,
};

const HELP: &str = "commands: <row> <col> to select, c to clear all selections, q to quit";

/// Pick one literal per row without ever picking a variable and its negation
#[derive(Parser, Debug)]
#[command(name = "literal-grid", version, about, long_about = None)]
struct Cli {
    /// Total row limit
    #[arg(long)]
    rows: Option<usize>,

    /// Literals per row
    #[arg(long)]
    cols: Option<usize>,

    /// Number of distinct variables
    #[arg(long)]
    variables: Option<u32>,

    /// Rows shown at the start
    #[arg(long)]
    initial_rows: Option<usize>,

    /// RNG seed, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn config(&self) -> PuzzleConfig {
        let mut config = PuzzleConfig::default();
        if let Some(rows) = self.rows {
            config = config.with_rows(rows);
        }
        if let Some(cols) = self.cols {
            config = config.with_cols(cols);
        }
        if let Some(variables) = self.variables {
            config = config.with_variables(variables);
        }
        if let Some(initial_rows) = self.initial_rows {
            config = config.with_initial_rows(initial_rows);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select { row: usize, col: usize },
    Clear,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let command = match first {
        "c" | "clear" => Command::Clear,
        "q" | "quit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        _ => {
            let row = first.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            Command::Select { row, col }
        }
    };
    match words.next() {
        Some(_) => None,
        None => Some(command),
    }
}

/// Dispatch one action and post the resulting message. Returns true once won.
///
/// A rejected click still runs the end-of-game check, so a stuck player sees
/// the forfeit prompt instead of the rejection.
fn dispatch(
    game: &mut LiteralGrid,
    state: &mut GameState,
    action: Action,
    messages: &mut MessageBoard,
) -> bool {
    let now = Instant::now();
    let rejected = match game.apply_action(state, &action) {
        Ok(transition) => {
            if let Some(row) = transition.row_added {
                debug!("row {} revealed", row);
            }
            if let Some(text) = transition.status.message() {
                messages.show(text, now);
            }
            return transition.status.is_terminal();
        }
        Err(GameError::GameOver) => return true,
        Err(err) => err,
    };

    if rejected.is_conflict() {
        messages.show("Invalid selection", now);
    } else {
        messages.show(rejected.to_string(), now);
    }
    let status = game.status(state);
    if status == GameStatus::PossibleForfeit {
        if let Some(text) = status.message() {
            messages.show(text, now);
        }
    }
    false
}

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let cli = Cli::parse();
    let (mut game, mut state) = match LiteralGrid::start(cli.config()) {
        Ok(started) => started,
        Err(err) => {
            error!("invalid configuration: {}", err);
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("seed {}", state.seed());

    let renderer = Renderer::new(!cli.no_color);
    let mut messages = MessageBoard::new(state.config().message_timeout());
    println!("{}", renderer.view(&state, messages.current()));
    println!("{HELP}");

    let reader = BufReader::new(io::stdin());
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("reading input: {}", err);
                return ExitCode::FAILURE;
            }
        };

        if messages.tick(Instant::now()) {
            debug!("message expired");
        }
        messages.clear();

        let action = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) | None => {
                println!("{HELP}");
                continue;
            }
            Some(Command::Clear) => Some(Action::ClearSelections),
            Some(Command::Select { row, col }) => state
                .row(row)
                .and_then(|cells| cells.get(col))
                .map(|&literal| Action::select(row, literal)),
        };

        let won = match action {
            Some(action) => dispatch(&mut game, &mut state, action, &mut messages),
            None => {
                messages.show("No such cell", Instant::now());
                false
            }
        };

        println!("{}", renderer.view(&state, messages.current()));
        if won {
            break;
        }
    }

    let stats = game.stats();
    info!(
        "{} selections, {} rejected, {} clears, {} rows added",
        stats.selections, stats.rejections, stats.clears, stats.rows_added
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use literal_grid::Literal;

    fn fixed(limit: usize, rows: &[&[i32]]) -> GameState {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&v| Literal::new(v)).collect::<Vec<_>>());
        GameState::from_rows(PuzzleConfig::new().with_rows(limit).with_seed(1), rows).unwrap()
    }

    fn click(
        game: &mut LiteralGrid,
        state: &mut GameState,
        messages: &mut MessageBoard,
        row: usize,
        lit: i32,
    ) -> bool {
        dispatch(game, state, Action::select(row, Literal::new(lit)), messages)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("2 1"), Some(Command::Select { row: 2, col: 1 }));
        assert_eq!(parse_command("  0   0 "), Some(Command::Select { row: 0, col: 0 }));
        assert_eq!(parse_command("c"), Some(Command::Clear));
        assert_eq!(parse_command("clear"), Some(Command::Clear));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("1"), None);
        assert_eq!(parse_command("1 x"), None);
        assert_eq!(parse_command("1 2 3"), None);
    }

    #[test]
    fn test_cli_config_overrides() {
        let cli = Cli::parse_from(["literal-grid", "--rows", "8", "--seed", "3", "--no-color"]);
        let config = cli.config();

        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 3);
        assert_eq!(config.seed, Some(3));
        assert!(cli.no_color);
    }

    #[test]
    fn test_dispatch_messages() {
        let mut state = fixed(2, &[&[1, 2, 3], &[-1, 4, 5]]);
        let mut game = LiteralGrid::new();
        let mut messages = MessageBoard::new(state.config().message_timeout());

        assert!(!click(&mut game, &mut state, &mut messages, 0, 1));
        assert_eq!(messages.current(), None);

        assert!(!click(&mut game, &mut state, &mut messages, 1, -1));
        assert_eq!(messages.current(), Some("Invalid selection"));

        assert!(click(&mut game, &mut state, &mut messages, 1, 4));
        assert_eq!(messages.current(), Some("You win!"));
        assert_eq!(game.status(&state), GameStatus::Won);
    }

    #[test]
    fn test_rejected_click_when_stuck_offers_forfeit() {
        let mut state = fixed(4, &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[-1, -4, -7]]);
        let mut game = LiteralGrid::new();
        let mut messages = MessageBoard::new(state.config().message_timeout());

        for (row, lit) in [(0, 1), (1, 4), (2, 7)] {
            click(&mut game, &mut state, &mut messages, row, lit);
        }
        assert_eq!(messages.current(), Some("Do you forfeit?"));
        messages.clear();

        assert!(!click(&mut game, &mut state, &mut messages, 3, -1));
        assert_eq!(messages.current(), Some("Do you forfeit?"));
        assert_eq!(game.status(&state), GameStatus::PossibleForfeit);
        assert_eq!(state.selection(3), None);
    }

    #[test]
    fn test_rejected_click_with_moves_left_is_invalid() {
        let mut state = fixed(4, &[&[1, 2, 3], &[-1, 5, 6]]);
        let mut game = LiteralGrid::new();
        let mut messages = MessageBoard::new(state.config().message_timeout());

        click(&mut game, &mut state, &mut messages, 0, 1);
        click(&mut game, &mut state, &mut messages, 1, -1);

        assert_eq!(messages.current(), Some("Invalid selection"));
        assert_eq!(game.status(&state), GameStatus::InProgress);
    }
}
