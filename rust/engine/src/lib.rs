//! # fourinarow-engine: Four-in-a-Row Game Core
//!
//! Board model and rules for a two-player, gravity-fed Connect Four variant
//! on a fixed 7x6 grid. The engine performs no I/O; console interaction lives
//! in the `fourinarow_cli` crate.
//!
//! ## Core Modules
//!
//! - [`config`] - Board geometry and display symbols
//! - [`board`] - Cell grid, marker placement with gravity
//! - [`player`] - The two sides and turn alternation
//! - [`rules`] - Line detection and draw detection after each move
//! - [`game`] - Turn-by-turn state machine and [`game::Outcome`]
//! - [`errors`] - Error types for invalid moves
//!
//! ## Quick Start
//!
//! ```rust
//! use fourinarow_engine::board::Board;
//! use fourinarow_engine::game::Outcome;
//! use fourinarow_engine::player::Player;
//! use fourinarow_engine::rules::check_for_end;
//!
//! let mut board = Board::default();
//! for column in 0..4 {
//!     board.place_marker(column, Player::O).unwrap();
//! }
//! assert_eq!(check_for_end(&board, Player::O), Outcome::Win(Player::O));
//! ```
//!
//! ## Rejected Moves
//!
//! Placement never corrupts the board; a full or missing column is an error:
//!
//! ```rust
//! use fourinarow_engine::board::Board;
//! use fourinarow_engine::errors::GameError;
//! use fourinarow_engine::player::Player;
//!
//! let mut board = Board::default();
//! for _ in 0..6 {
//!     board.place_marker(2, Player::X).unwrap();
//! }
//! assert_eq!(board.place_marker(2, Player::O), Err(GameError::ColumnFull { column: 2 }));
//! ```

pub mod board;
pub mod config;
pub mod errors;
pub mod game;
pub mod player;
pub mod rules;
