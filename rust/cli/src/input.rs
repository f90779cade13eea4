//! Move input parsing and the interactive move prompt.
//!
//! Everything the player types goes through [`parse_move`]. Rejected text is
//! reported and re-prompted inside [`get_player_move`]; it never costs a turn
//! and never reaches the board.

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use fourinarow_engine::board::Board;
use fourinarow_engine::player::Player;
use std::io::{BufRead, Write};

/// Words that end the game, matched after trimming and upper-casing.
pub const QUIT_KEYWORDS: [&str; 2] = ["QUIT", "EXIT"];

pub const INVALID_MOVE: &str = "Invalid move.";
pub const COLUMN_FULL: &str = "That column is full. Please pick another.";

/// Result of parsing one line of move input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Zero-based column index, within the board width
    Column(usize),
    /// User entered a quit keyword
    Quit,
    /// Anything else, with the reason it was rejected
    Invalid(String),
}

/// Parses player input into a column choice or a quit request.
///
/// Input is trimmed and compared case-insensitively. Columns are typed
/// 1-based and must match one of `1` to `width` exactly, so `01` or `+3`
/// are rejected.
///
/// # Example
///
/// ```rust
/// # use fourinarow_cli::input::{parse_move, ParseResult};
///
/// assert_eq!(parse_move("4", 7), ParseResult::Column(3));
/// assert_eq!(parse_move("  Quit ", 7), ParseResult::Quit);
/// assert_eq!(parse_move("exit", 7), ParseResult::Quit);
/// assert!(matches!(parse_move("8", 7), ParseResult::Invalid(_)));
/// assert!(matches!(parse_move("abc", 7), ParseResult::Invalid(_)));
/// assert!(matches!(parse_move("04", 7), ParseResult::Invalid(_)));
/// ```
pub fn parse_move(input: &str, width: usize) -> ParseResult {
    let response = input.trim().to_uppercase();

    if QUIT_KEYWORDS.contains(&response.as_str()) {
        return ParseResult::Quit;
    }

    match (1..=width).find(|n| n.to_string() == response) {
        Some(n) => ParseResult::Column(n - 1),
        None => {
            let reason = format!("'{}' is not a column from 1 to {}", input.trim(), width);
            ParseResult::Invalid(reason)
        }
    }
}

/// Outcome of prompting the current player.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayerMove {
    /// Zero-based column that is on the board and not full
    Column(usize),
    /// Player typed a quit keyword
    Quit,
    /// Input stream closed before a move was entered
    EndOfInput,
}

/// Prompts `player` until they enter a playable column or quit.
///
/// Invalid text and full columns are reported on `out` and the prompt is
/// repeated. The board is only read, never changed.
pub fn get_player_move(
    board: &Board,
    player: Player,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<PlayerMove, CliError> {
    let symbol = player.symbol(board.config().symbols());
    writeln!(out, "Player {} to move.", symbol)?;

    loop {
        writeln!(
            out,
            "Please enter a number from 1 to {},\nor QUIT to exit.",
            board.width()
        )?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin)? else {
            return Ok(PlayerMove::EndOfInput);
        };

        match parse_move(&line, board.width()) {
            ParseResult::Quit => return Ok(PlayerMove::Quit),
            ParseResult::Invalid(reason) => {
                tracing::debug!(input = %line, %reason, "rejected move input");
                writeln!(out, "{}", INVALID_MOVE)?;
            }
            ParseResult::Column(column) if board.is_column_full(column) => {
                tracing::debug!(column, "rejected move into full column");
                writeln!(out, "{}", COLUMN_FULL)?;
            }
            ParseResult::Column(column) => return Ok(PlayerMove::Column(column)),
        }
    }
}
