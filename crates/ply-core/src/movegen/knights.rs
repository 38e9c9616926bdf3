//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, gen_offsets};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(super) fn gen_knight(board: &Board, from: Position, us: Color, moves: &mut MoveSet) {
    gen_offsets(board, from, us, &KNIGHT_OFFSETS, moves);
}
