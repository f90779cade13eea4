//! # Play Command
//!
//! Runs one interactive game between two players sharing the console.
//!
//! Each turn the current player is prompted for a column, the marker is
//! dropped, the board is redrawn, and the rules engine decides whether the
//! mover has won or the board is full. The game ends on a win, a draw, a quit
//! keyword, or closed input. The handler returns the [`Outcome`]; it never
//! exits the process itself.

use crate::error::CliError;
use crate::input::{PlayerMove, get_player_move};
use crate::render::draw_board;
use crate::ui;
use fourinarow_engine::config::BoardConfig;
use fourinarow_engine::game::{Game, Outcome};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to Four-in-a-Row, a Connect Four clone.";
pub const FAREWELL: &str = "Thanks for playing.";
pub const DRAW: &str = "It's a draw!";

/// Handle the play command: one complete game.
///
/// # Arguments
///
/// * `config` - Board geometry and symbols
/// * `stdin` - Input stream for player moves
/// * `out` - Output stream for the board, prompts and results
/// * `err` - Error stream for warnings
///
/// # Returns
///
/// * `Ok(Outcome)` - `Win`, `Draw` or `Quit`, never `Ongoing`
/// * `Err(CliError)` if writing to the console fails
///
/// # Examples
///
/// ```
/// use fourinarow_cli::commands::handle_play_command;
/// use fourinarow_engine::config::BoardConfig;
/// use fourinarow_engine::game::Outcome;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("quit\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let outcome =
///     handle_play_command(BoardConfig::standard(), &mut input, &mut out, &mut err).unwrap();
/// assert_eq!(outcome, Outcome::Quit);
/// ```
pub fn handle_play_command(
    config: BoardConfig,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, CliError> {
    writeln!(out, "{}", WELCOME)?;

    let mut game = Game::new(config);
    draw_board(out, game.board())?;
    tracing::info!("game started");

    while !game.is_over() {
        let player = game.current_player();
        match get_player_move(game.board(), player, stdin, out)? {
            PlayerMove::Column(column) => {
                let outcome = game.play(column)?;
                draw_board(out, game.board())?;
                match outcome {
                    Outcome::Win(winner) => {
                        let symbol = winner.symbol(config.symbols());
                        writeln!(out, "Player {} wins!", symbol)?;
                    }
                    Outcome::Draw => writeln!(out, "{}", DRAW)?,
                    Outcome::Ongoing | Outcome::Quit => {}
                }
            }
            PlayerMove::Quit => {
                game.quit();
                writeln!(out, "{}", FAREWELL)?;
            }
            PlayerMove::EndOfInput => {
                ui::display_warning(err, "input closed, ending game")?;
                game.quit();
                writeln!(out, "{}", FAREWELL)?;
            }
        }
    }

    tracing::info!(
        outcome = ?game.outcome(),
        moves = game.moves_played(),
        "game finished"
    );
    Ok(game.outcome())
}
