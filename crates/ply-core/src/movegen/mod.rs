//! Pseudo-legal move generation.
//!
//! The calculators here look only at piece placement. They never mutate the
//! board and know nothing about turn order or king safety; filtering for
//! legality happens in [`Game`](crate::game::Game).

mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// An unordered, duplicate-free collection of moves.
pub type MoveSet = HashSet<Move>;

/// What a piece of a given color finds on a square it could reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Empty,
    Enemy,
    Friendly,
}

fn target(board: &Board, pos: Position, us: Color) -> Target {
    match board.piece_at(pos) {
        None => Target::Empty,
        Some(piece) if piece.color() == us => Target::Friendly,
        Some(_) => Target::Enemy,
    }
}

/// Push one move per offset that lands on the board and not on a friendly piece.
fn gen_offsets(board: &Board, from: Position, us: Color, offsets: &[(i8, i8)], moves: &mut MoveSet) {
    for &(d_row, d_column) in offsets {
        let Some(to) = from.offset(d_row, d_column) else {
            continue;
        };
        if target(board, to, us) != Target::Friendly {
            moves.insert(Move::new(from, to));
        }
    }
}

/// Return the pseudo-legal moves of the piece on `from`.
///
/// An empty square yields an empty set. Castling and en passant are never
/// produced.
pub fn piece_moves(board: &Board, from: Position) -> MoveSet {
    let mut moves = MoveSet::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let us = piece.color();

    match piece.kind() {
        PieceKind::King => gen_king(board, from, us, &mut moves),
        PieceKind::Queen => {
            gen_slider(board, from, us, &ROOK_DIRECTIONS, &mut moves);
            gen_slider(board, from, us, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceKind::Rook => gen_slider(board, from, us, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => gen_slider(board, from, us, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Knight => gen_knight(board, from, us, &mut moves),
        PieceKind::Pawn => gen_pawn(board, from, us, &mut moves),
    }

    moves
}
