use serde::Serialize;

/// Number of columns on the standard board.
pub const BOARD_WIDTH: usize = 7;
/// Number of rows on the standard board.
pub const BOARD_HEIGHT: usize = 6;
/// Markers in a row needed to win.
pub const CONNECT: usize = 4;

/// Characters used to draw each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbols {
    pub player_x: char,
    pub player_o: char,
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            player_x: 'X',
            player_o: 'O',
            empty: '.',
        }
    }
}

/// Board geometry and display symbols.
///
/// Passed explicitly into the board and renderer instead of living in
/// process-wide constants. The geometry is fixed at 7x6 with four in a row;
/// only the symbols can be changed through [`BoardConfig::with_symbols`].
/// Serializes as `width`, `height`, `connect` and a nested `symbols` map.
///
/// # Examples
///
/// ```
/// use fourinarow_engine::config::{BoardConfig, Symbols};
///
/// let cfg = BoardConfig::standard();
/// assert_eq!((cfg.width(), cfg.height(), cfg.connect()), (7, 6, 4));
///
/// let custom = cfg.with_symbols(Symbols { player_x: 'R', player_o: 'Y', empty: ' ' });
/// assert_eq!(custom.symbols().player_x, 'R');
/// assert_eq!(custom.width(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardConfig {
    width: usize,
    height: usize,
    connect: usize,
    symbols: Symbols,
}

impl BoardConfig {
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            connect: CONNECT,
            symbols: Symbols::default(),
        }
    }

    pub fn with_symbols(self, symbols: Symbols) -> Self {
        Self { symbols, ..self }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn connect(&self) -> usize {
        self.connect
    }
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}
