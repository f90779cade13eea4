use crate::config::Symbols;

/// One of the two sides. `X` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves first in every game.
    pub const FIRST: Player = Player::X;

    /// Returns the opponent.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Display name used in prompts and result messages.
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    /// Character drawn for this player's markers.
    pub fn symbol(self, symbols: &Symbols) -> char {
        match self {
            Player::X => symbols.player_x,
            Player::O => symbols.player_o,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_alternates() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::FIRST.other().other(), Player::FIRST);
    }

    #[test]
    fn test_symbol_follows_config() {
        let symbols = Symbols {
            player_x: 'R',
            player_o: 'Y',
            empty: '-',
        };
        assert_eq!(Player::X.symbol(&symbols), 'R');
        assert_eq!(Player::O.symbol(&symbols), 'Y');
        assert_eq!(Player::O.to_string(), "O");
    }
}
