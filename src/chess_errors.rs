//! Errors used throughout the chess engine.
//!
//! Rule operations themselves are infallible: illegal moves are never offered
//! to `make_move`, undo on an empty history is a no-op, and an empty legal-move
//! list is a terminal signal. `ChessError` covers the boundaries that can see
//! bad input: FEN and notation parsing, engine selection, and the search worker.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN string could not be interpreted.
    InvalidFen(String),
    /// An algebraic square such as `e4` was malformed or out of range.
    InvalidSquare(String),
    /// A move in `<file><rank><file><rank>` form is malformed or not legal here.
    InvalidMove(String),
    /// An engine was asked to move in a position with no legal moves.
    NoLegalMoves,
    /// The search worker went away without delivering a result.
    WorkerDisconnected,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::InvalidMove(msg) => write!(f, "invalid move: {msg}"),
            ChessError::NoLegalMoves => write!(f, "no legal moves in this position"),
            ChessError::WorkerDisconnected => {
                write!(f, "search worker disconnected before delivering a result")
            }
        }
    }
}

impl Error for ChessError {}
