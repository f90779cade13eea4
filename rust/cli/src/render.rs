//! Text rendering of the board.
//!
//! The layout for the standard board, with the symbols taken from the
//! board's configuration:
//!
//! ```text
//!
//!  1234567
//! +-------+
//! |.......|
//! |.......|
//! |.......|
//! |.......|
//! |...O...|
//! |..XX...|
//! +-------+
//!
//! ```

use fourinarow_engine::board::{Board, Cell};
use std::io::Write;

/// Formats the board as the lines [`draw_board`] prints, including the
/// leading and trailing blank lines.
///
/// # Example
///
/// ```rust
/// use fourinarow_engine::board::Board;
/// use fourinarow_engine::player::Player;
/// use fourinarow_cli::render::format_board;
///
/// let mut board = Board::default();
/// board.place_marker(0, Player::X).unwrap();
/// let text = format_board(&board);
/// assert!(text.starts_with("\n 1234567 \n+-------+\n"));
/// assert!(text.ends_with("|X......|\n+-------+\n\n"));
/// ```
pub fn format_board(board: &Board) -> String {
    let symbols = board.config().symbols();
    let labels: String = (1..=board.width()).map(|n| n.to_string()).collect();
    let border = format!("+{}+", "-".repeat(board.width()));

    let mut text = String::from("\n");
    text.push_str(&format!(" {} \n", labels));
    text.push_str(&border);
    text.push('\n');
    for row in board.rows() {
        text.push('|');
        text.extend(row.map(|cell| match cell {
            Cell::Empty => symbols.empty,
            Cell::Taken(player) => player.symbol(symbols),
        }));
        text.push_str("|\n");
    }
    text.push_str(&border);
    text.push_str("\n\n");
    text
}

/// Prints the board to `out`.
pub fn draw_board(out: &mut dyn Write, board: &Board) -> std::io::Result<()> {
    write!(out, "{}", format_board(board))
}
