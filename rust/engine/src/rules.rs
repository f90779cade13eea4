use crate::board::{Board, Cell};
use crate::game::Outcome;
use crate::player::Player;

/// The four line orientations, each stepping from a start cell toward
/// increasing row (or increasing column for horizontal lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(column, row)` step between consecutive cells of a line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (-1, 1),
        }
    }
}

/// A winning run: its first cell and the direction it extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub column: usize,
    pub row: usize,
    pub direction: Direction,
}

impl Line {
    /// Cells covered by the line, starting from its first cell.
    pub fn cells(&self, length: usize) -> Vec<(usize, usize)> {
        let (dc, dr) = self.direction.delta();
        (0..length as isize)
            .map(|i| {
                (
                    (self.column as isize + dc * i) as usize,
                    (self.row as isize + dr * i) as usize,
                )
            })
            .collect()
    }
}

/// Finds the first run of `connect` consecutive `player` markers.
///
/// Every start cell is tried in every direction; runs that would leave the
/// board are skipped.
pub fn find_line(board: &Board, player: Player) -> Option<Line> {
    let connect = board.config().connect() as isize;
    let target = Cell::Taken(player);
    Direction::ALL.into_iter().find_map(|direction| {
        let (dc, dr) = direction.delta();
        (0..board.width()).find_map(|column| {
            (0..board.height()).find_map(|row| {
                let (c, r) = (column as isize, row as isize);
                (0..connect)
                    .all(|i| board.get(c + dc * i, r + dr * i) == Some(target))
                    .then_some(Line {
                        column,
                        row,
                        direction,
                    })
            })
        })
    })
}

/// Classifies the board right after `player` moved.
///
/// Only the mover can have just completed a line, so the opponent is never
/// checked. A draw requires no winning line and a full top row.
///
/// # Examples
///
/// ```
/// use fourinarow_engine::board::Board;
/// use fourinarow_engine::game::Outcome;
/// use fourinarow_engine::player::Player;
/// use fourinarow_engine::rules::check_for_end;
///
/// let mut board = Board::default();
/// for _ in 0..4 {
///     board.place_marker(0, Player::X).unwrap();
/// }
/// assert_eq!(check_for_end(&board, Player::X), Outcome::Win(Player::X));
/// assert_eq!(check_for_end(&board, Player::O), Outcome::Ongoing);
/// ```
pub fn check_for_end(board: &Board, player: Player) -> Outcome {
    if let Some(line) = find_line(board, player) {
        tracing::info!(
            player = player.name(),
            column = line.column,
            row = line.row,
            direction = ?line.direction,
            cells = ?line.cells(board.config().connect()),
            "winning line found"
        );
        return Outcome::Win(player);
    }
    if board.is_top_row_full() {
        tracing::info!("board full, game drawn");
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
