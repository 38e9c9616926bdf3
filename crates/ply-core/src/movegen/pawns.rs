//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, Target, target};

/// Push a pawn move, expanding it into the four promotions on the last row.
fn push_pawn_move(from: Position, to: Position, us: Color, moves: &mut MoveSet) {
    if to.row() == us.promotion_row() {
        for promo in PromotionPiece::ALL {
            moves.insert(Move::new_promotion(from, to, promo));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}

/// Generate pawn pushes and captures. En passant is not modeled.
pub(super) fn gen_pawn(board: &Board, from: Position, us: Color, moves: &mut MoveSet) {
    let forward = us.forward();

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0)
        && !board.is_occupied(one)
    {
        push_pawn_move(from, one, us, moves);

        if from.row() == us.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && !board.is_occupied(two)
        {
            push_pawn_move(from, two, us, moves);
        }
    }

    // --- Captures ---
    for d_column in [-1, 1] {
        if let Some(to) = from.offset(forward, d_column)
            && target(board, to, us) == Target::Enemy
        {
            push_pawn_move(from, to, us, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::movegen::piece_moves;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn white_pawn_single_and_double_push() {
        let board = Board::starting_position();
        let moves = piece_moves(&board, Position::E2);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(Position::E2, Position::E3)));
        assert!(moves.contains(&Move::new(Position::E2, Position::E4)));
    }

    #[test]
    fn black_pawn_moves_down() {
        let board = Board::starting_position();
        let moves = piece_moves(&board, Position::D7);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(Position::D7, Position::D6)));
        assert!(moves.contains(&Move::new(Position::D7, Position::D5)));
    }

    #[test]
    fn double_push_only_from_start_row() {
        let mut board = Board::empty();
        board.set_piece(Position::E3, Some(Piece::WHITE_PAWN));
        let moves = piece_moves(&board, Position::E3);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::new(Position::E3, Position::E4)));
    }

    #[test]
    fn blocked_pawn() {
        let mut board = Board::starting_position();
        // Blocker directly ahead stops both pushes.
        board.set_piece(Position::E3, Some(Piece::BLACK_KNIGHT));
        assert!(piece_moves(&board, Position::E2).is_empty());

        // Blocker two ahead stops only the double push.
        board.remove_piece(Position::E3);
        board.set_piece(Position::E4, Some(Piece::BLACK_KNIGHT));
        let moves = piece_moves(&board, Position::E2);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::new(Position::E2, Position::E3)));
    }

    #[test]
    fn diagonal_captures_only_enemies() {
        let mut board = Board::empty();
        board.set_piece(Position::D4, Some(Piece::WHITE_PAWN));
        board.set_piece(Position::C5, Some(Piece::BLACK_ROOK));
        board.set_piece(Position::E5, Some(Piece::WHITE_KNIGHT));
        board.set_piece(Position::D5, Some(Piece::BLACK_PAWN));
        let moves = piece_moves(&board, Position::D4);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::new(Position::D4, Position::C5)));
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::empty();
        board.set_piece(Position::A7, Some(Piece::WHITE_PAWN));
        let moves = piece_moves(&board, Position::A7);
        assert_eq!(moves.len(), 4);
        for promo in PromotionPiece::ALL {
            assert!(moves.contains(&Move::new_promotion(Position::A7, Position::A8, promo)));
        }
        assert!(!moves.contains(&Move::new(Position::A7, Position::A8)));
    }

    #[test]
    fn black_promotion_with_capture() {
        let mut board = Board::empty();
        board.set_piece(Position::B2, Some(Piece::BLACK_PAWN));
        board.set_piece(Position::C1, Some(Piece::WHITE_BISHOP));
        let moves = piece_moves(&board, Position::B2);
        // Four promotions straight ahead and four on the capture.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert!(moves.contains(&Move::new_promotion(Position::B2, Position::C1, PromotionPiece::Knight)));
    }
}
