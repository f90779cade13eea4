use crate::board::Board;
use crate::config::BoardConfig;
use crate::errors::GameError;
use crate::player::Player;
use crate::rules::check_for_end;

/// Classification of a game after a move or a quit request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// No result yet; the next player is to move.
    Ongoing,
    /// The given player completed a line.
    Win(Player),
    /// The board filled with no line.
    Draw,
    /// A player asked to stop.
    Quit,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// A single game: the board, whose turn it is, and the outcome so far.
/// Once the outcome is anything but [`Outcome::Ongoing`] every further move
/// is refused.
///
/// # Examples
///
/// ```
/// use fourinarow_engine::config::BoardConfig;
/// use fourinarow_engine::game::{Game, Outcome};
/// use fourinarow_engine::player::Player;
///
/// let mut game = Game::new(BoardConfig::standard());
/// for column in [0, 6, 0, 6, 0, 6] {
///     assert_eq!(game.play(column).unwrap(), Outcome::Ongoing);
/// }
/// assert_eq!(game.play(0).unwrap(), Outcome::Win(Player::X));
/// assert!(game.play(1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Player,
    outcome: Outcome,
    moves: usize,
}

impl Game {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            current: Player::FIRST,
            outcome: Outcome::Ongoing,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Player {
        self.current
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// Drops the current player's marker into `column` and evaluates the
    /// board for that player. The turn passes only while the game is still
    /// ongoing.
    pub fn play(&mut self, column: usize) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mover = self.current;
        self.board.place_marker(column, mover)?;
        self.moves += 1;
        self.outcome = check_for_end(&self.board, mover);
        if !self.is_over() {
            self.current = mover.other();
        }
        Ok(self.outcome)
    }

    /// Ends the game at the current player's request. The board is left as
    /// it is; quitting an already finished game keeps its original outcome.
    pub fn quit(&mut self) -> Outcome {
        if !self.is_over() {
            tracing::info!(
                player = self.current.name(),
                moves = self.moves,
                "game quit"
            );
            self.outcome = Outcome::Quit;
        }
        self.outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardConfig::standard())
    }
}
