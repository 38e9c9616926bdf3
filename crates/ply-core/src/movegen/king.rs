//! King move generation. Castling is not modeled.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, gen_offsets};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(super) fn gen_king(board: &Board, from: Position, us: Color, moves: &mut MoveSet) {
    gen_offsets(board, from, us, &KING_OFFSETS, moves);
}
