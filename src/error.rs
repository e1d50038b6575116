//! errors raised by the board and by the terminal driver.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// the board size is not a positive square.
    #[error("Invalid board size: {0}")]
    InvalidSize(#[from] SizeError),
    /// a cell position is not a pair of integers.
    #[error("Invalid cell position: {0:?}, expected `x,y`")]
    InvalidPosition(String),
    /// a cell state is neither `alive` nor `dead`.
    #[error("Cell state must be either 'dead' or 'alive', not {0:?}")]
    InvalidState(String),
    /// a coordinate falls outside the board.
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i64, y: i64 },
    #[error("Alive and dead symbols must differ, both are {0:?}")]
    InvalidSymbols(char),
    #[error("You must enter a number, not {0:?}")]
    InvalidNumber(String),
    #[error("You must either enter Y or N, not {0:?}")]
    InvalidMode(String),
    #[error(transparent)]
    Args(#[from] docopt::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// the distinct ways a board size can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("board must be composed of an X and Y, got {0} components")]
    Arity(usize),
    #[error("X and Y size must be integers, not {0:?}")]
    NotInteger(String),
    #[error("board size must be positive, not {0}, {1}")]
    NonPositive(i64, i64),
    #[error("board size must be a square, not {0}, {1}")]
    NotSquare(i64, i64),
    #[error("board side {0} is larger than {1}")]
    TooLarge(i64, i64),
}
