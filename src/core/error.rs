//! Error types for draughts-core

use thiserror::Error;

use crate::core::utils::Square;

/// Rule broken by a rejected move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("no own piece on the starting square")]
    NotOwnPiece,

    #[error("start and destination coincide")]
    SameSquare,

    #[error("destination is not on a diagonal of the starting square")]
    NotDiagonal,

    #[error("busy cell")]
    Occupied,

    #[error("a man moves one square at a time")]
    TooFar,

    #[error("path is blocked")]
    Blocked,

    #[error("nothing to capture")]
    NothingToCapture,

    #[error("cannot jump over own piece")]
    OwnPiece,

    #[error("cannot jump over two pieces at once")]
    TwoPieces,

    #[error("capture available, simple move forbidden")]
    CaptureAvailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    #[error("white cell {token}")]
    InvalidSquare { token: String },

    #[error("invalid move {from}-{to}: {violation}")]
    IllegalMove {
        from: Square,
        to: Square,
        violation: Violation,
    },

    #[error("square {square} is occupied twice")]
    DuplicatePlacement { square: Square },

    #[error("malformed move {token}")]
    MalformedMove { token: String },

    #[error("empty input")]
    EmptyInput,
}

impl DraughtsError {
    pub fn illegal(from: Square, to: Square, violation: Violation) -> Self {
        DraughtsError::IllegalMove {
            from,
            to,
            violation,
        }
    }
}

pub type Result<T> = std::result::Result<T, DraughtsError>;
