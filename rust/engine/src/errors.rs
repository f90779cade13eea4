use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },
    #[error("Column {column} is full")]
    ColumnFull { column: usize },
    #[error("Game is already over")]
    GameOver,
}
