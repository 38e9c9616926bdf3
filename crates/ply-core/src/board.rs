//! The chess board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Major-piece order along the back rank, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the 64 squares.
///
/// The board is a small `Copy` value. It carries no history: it is a pure
/// snapshot of which piece stands where.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by [`Position::index()`].
    squares: [Option<Piece>; Position::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Position::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clear the board and set up the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [None; Position::COUNT];
        for color in Color::ALL {
            for (column, kind) in (1u8..=8).zip(BACK_RANK) {
                if let Some(pos) = Position::new(color.back_row(), column) {
                    self.set_piece(pos, Some(Piece::new(color, kind)));
                }
                if let Some(pos) = Position::new(color.pawn_row(), column) {
                    self.set_piece(pos, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    /// Put `piece` on the square, or empty the square with `None`.
    ///
    /// Whatever stood there before is overwritten.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    /// Empty the square and return what stood there.
    #[inline]
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()].take()
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_some()
    }

    /// Iterate over every occupied square together with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Iterate over the squares occupied by `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    ///
    /// With more than one king, the first found scanning from a1 wins.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(pos, _)| pos)
    }

    /// Move whatever stands on `start` to `end` as `placed`, capturing any occupant.
    ///
    /// Returns the piece previously on `end`. No legality is checked.
    pub(crate) fn relocate(&mut self, start: Position, end: Position, placed: Piece) -> Option<Piece> {
        let captured = self.squares[end.index()].replace(placed);
        self.squares[start.index()] = None;
        captured
    }

    /// Validate the structural sanity of the placement.
    ///
    /// The engine does not require this to hold; it is offered to callers
    /// loading arbitrary positions.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(color, PieceKind::King);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(pos, piece)| {
            piece.kind() == PieceKind::Pawn && (pos.row() == 1 || pos.row() == 8)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1u8..=8).rev() {
            write!(f, "{row} ")?;
            for column in 1u8..=8 {
                let c = Position::new(row, column)
                    .and_then(|pos| self.0.piece_at(pos))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_piece_at() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Position::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Position::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(Position::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Position::B1), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_at(Position::C1), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.piece_at(Position::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Position::E8), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(Position::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(Position::H7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Position::E4), None);
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn reset_restores_start() {
        let mut board = Board::empty();
        board.set_piece(Position::D4, Some(Piece::BLACK_QUEEN));
        board.reset();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn set_and_remove() {
        let mut board = Board::empty();
        board.set_piece(Position::C3, Some(Piece::WHITE_KNIGHT));
        assert!(board.is_occupied(Position::C3));
        assert_eq!(board.remove_piece(Position::C3), Some(Piece::WHITE_KNIGHT));
        assert!(!board.is_occupied(Position::C3));
        assert_eq!(board.remove_piece(Position::C3), None);
    }

    #[test]
    fn king_position() {
        let board = Board::starting_position();
        assert_eq!(board.king_position(Color::White), Some(Position::E1));
        assert_eq!(board.king_position(Color::Black), Some(Position::E8));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn relocate_returns_capture() {
        let mut board = Board::starting_position();
        let captured = board.relocate(Position::D1, Position::D7, Piece::WHITE_QUEEN);
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Position::D7), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(Position::D1), None);
    }

    #[test]
    fn validate_missing_king() {
        let mut board = Board::starting_position();
        board.remove_piece(Position::E8);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            })
        );
    }

    #[test]
    fn validate_pawn_on_back_rank() {
        let mut board = Board::starting_position();
        board.set_piece(Position::A8, Some(Piece::WHITE_PAWN));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}
