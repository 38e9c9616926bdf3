//! Chess rules core: board representation, move generation, and game rules.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod shared;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, InvalidMove};
pub use fen::STARTING_FEN;
pub use game::{Game, GameStatus};
pub use movegen::{MoveSet, piece_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use shared::SharedGame;
