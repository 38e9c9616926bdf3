//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, Target, target};

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Cast one ray per direction, stopping at the board edge or the first piece.
///
/// An enemy blocker is included as a capture; a friendly one is not.
pub(super) fn gen_slider(
    board: &Board,
    from: Position,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_column) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_column) {
            match target(board, to, us) {
                Target::Empty => {
                    moves.insert(Move::new(from, to));
                    cursor = to;
                }
                Target::Enemy => {
                    moves.insert(Move::new(from, to));
                    break;
                }
                Target::Friendly => break,
            }
        }
    }
}
