//! Error types for move submission, placement parsing and board validation.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

/// Reasons a submitted move is refused.
///
/// A refused move never changes the game, so every variant is recoverable:
/// the caller may simply submit another move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    /// The start square is empty.
    #[error("invalid move: no piece at {position}")]
    NoPieceAtOrigin {
        /// The empty start square.
        position: Position,
    },
    /// The piece on the start square cannot move at all.
    #[error("invalid move: the {piece} on {position} has no legal moves")]
    NoLegalMoves {
        /// The start square.
        position: Position,
        /// The piece standing there.
        piece: Piece,
    },
    /// The piece belongs to the side not on move.
    #[error("invalid move: it is {turn}'s turn, cannot move the {piece}")]
    NotYourTurn {
        /// The piece the caller tried to move.
        piece: Piece,
        /// The side whose turn it is.
        turn: Color,
    },
    /// The piece can move, but not like this.
    #[error("invalid move: {mv} is not legal")]
    MoveNotLegal {
        /// The refused move.
        mv: Move,
    },
}

/// Errors that occur when parsing a placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The string does not have 1, 2 or 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = row 8, 7 = row 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 1, 2 or 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid side to move: \"{found}\"")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth row.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
