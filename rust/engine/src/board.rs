use crate::config::BoardConfig;
use crate::errors::GameError;
use crate::player::Player;

/// State of a single board position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Gravity-fed grid of cells indexed by `(column, row)`.
///
/// Row 0 is the top of the board and `height - 1` the bottom. Markers in a
/// column always form an unbroken stack resting on the bottom row; the only
/// way to mutate the board is [`Board::place_marker`], which keeps that
/// invariant.
///
/// # Examples
///
/// ```
/// use fourinarow_engine::board::{create_board, Cell};
/// use fourinarow_engine::config::BoardConfig;
/// use fourinarow_engine::player::Player;
///
/// let mut board = create_board(BoardConfig::standard());
/// let row = board.place_marker(3, Player::X).unwrap();
/// assert_eq!(row, 5);
/// assert_eq!(board.cell(3, 5), Cell::Taken(Player::X));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    /// Column-major: `cells[column * height + row]`.
    cells: Vec<Cell>,
}

/// Builds an empty board for `config`.
pub fn create_board(config: BoardConfig) -> Board {
    Board::new(config)
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: vec![Cell::Empty; config.width() * config.height()],
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
    pub fn width(&self) -> usize {
        self.config.width()
    }
    pub fn height(&self) -> usize {
        self.config.height()
    }

    /// Cell at `(column, row)`. Panics if either index is off the board.
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        assert!(
            column < self.width() && row < self.height(),
            "cell ({column}, {row}) is off the board"
        );
        self.cells[self.index(column, row)]
    }

    /// Cell at signed coordinates, or `None` when they fall off the board.
    pub fn get(&self, column: isize, row: isize) -> Option<Cell> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        (column < self.width() && row < self.height()).then(|| self.cells[self.index(column, row)])
    }

    /// A column is full once its top cell is taken. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.width() || !self.cell(column, 0).is_empty()
    }

    /// True when every top-row cell is taken, which under gravity means the
    /// whole board is full.
    pub fn is_top_row_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    /// Columns that can still accept a marker, left to right.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width()).filter(|&column| !self.is_column_full(column))
    }

    /// Rows from top to bottom, each as a left-to-right iterator of cells.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        (0..self.height())
            .map(move |row| (0..self.width()).map(move |column| self.cell(column, row)))
    }

    /// Drops `player`'s marker into `column` and returns the row it lands on.
    ///
    /// Scans the column bottom-up and fills the first empty cell.
    ///
    /// # Errors
    ///
    /// - [`GameError::ColumnOutOfRange`] if `column >= width`
    /// - [`GameError::ColumnFull`] if the column's top cell is already taken
    ///
    /// The board is unchanged when an error is returned.
    pub fn place_marker(&mut self, column: usize, player: Player) -> Result<usize, GameError> {
        if column >= self.width() {
            return Err(GameError::ColumnOutOfRange {
                column,
                width: self.width(),
            });
        }
        let Some(row) = (0..self.height())
            .rev()
            .find(|&row| self.cell(column, row).is_empty())
        else {
            return Err(GameError::ColumnFull { column });
        };
        let idx = self.index(column, row);
        self.cells[idx] = Cell::Taken(player);
        tracing::debug!(column, row, player = player.name(), "marker placed");
        Ok(row)
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.height() + row
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::standard())
    }
}
