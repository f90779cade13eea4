use fourinarow_engine::board::{create_board, Cell};
use fourinarow_engine::config::{BoardConfig, Symbols};
use fourinarow_engine::game::{Game, Outcome};
use fourinarow_engine::player::Player;

#[test]
fn new_game_starts_empty_with_x_to_move() {
    let game = Game::new(BoardConfig::standard());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.moves_played(), 0);
    let board = game.board();
    assert_eq!((board.width(), board.height()), (7, 6));
    for column in 0..7 {
        for row in 0..6 {
            assert_eq!(board.cell(column, row), Cell::Empty);
        }
    }
}

#[test]
fn custom_symbols_keep_fixed_geometry() {
    let symbols = Symbols {
        player_x: '#',
        player_o: '@',
        empty: ' ',
    };
    let board = create_board(BoardConfig::standard().with_symbols(symbols));
    assert_eq!(board.width(), 7);
    assert_eq!(board.height(), 6);
    assert_eq!(board.config().connect(), 4);
    assert_eq!(*board.config().symbols(), symbols);
}
