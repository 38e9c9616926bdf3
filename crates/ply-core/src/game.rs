//! Game orchestration: turn order, legal-move filtering, move commit, and
//! check/checkmate/stalemate detection.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::InvalidMove;
use crate::movegen::{MoveSet, piece_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Summary of where the side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` once no further move can be played.
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if any enemy piece has a pseudo-legal move onto `color`'s king.
///
/// Enemy moves are not filtered for their own king's safety, so this never
/// recurses into legality checking. A board without a king for `color` is
/// never in check.
fn king_attacked(board: &Board, color: Color) -> bool {
    let mut king = None;
    let mut enemy_targets = Vec::new();

    for (pos, piece) in board.pieces() {
        if piece.color() == color {
            if piece.kind() == PieceKind::King {
                king = Some(pos);
            }
        } else {
            enemy_targets.extend(piece_moves(board, pos).into_iter().map(Move::end));
        }
    }

    king.is_some_and(|king| enemy_targets.contains(&king))
}

/// A chess game: the board plus whose turn it is.
///
/// Every query recomputes from the current placement; nothing is cached and
/// no move history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Start a new game from the standard position with White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }

    /// Start from an arbitrary placement with `turn` to move.
    ///
    /// The board is accepted even if it fails [`Board::validate`].
    pub fn with_board(board: Board, turn: Color) -> Game {
        let mut game = Game {
            board: Board::empty(),
            turn,
        };
        game.set_board(board);
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Replace the whole board. The side to move is left as it was.
    pub fn set_board(&mut self, board: Board) {
        if let Err(e) = board.validate() {
            warn!(error = %e, "installing a board that fails validation");
        }
        self.board = board;
    }

    /// Return the legal moves of the piece on `start`.
    ///
    /// An empty square and a piece with no legal move both give an empty
    /// set. Each candidate is played on a scratch copy of the board, so the
    /// game's own board is never touched.
    pub fn valid_moves(&self, start: Position) -> MoveSet {
        let Some(piece) = self.board.piece_at(start) else {
            return MoveSet::new();
        };

        let candidates = piece_moves(&self.board, start);
        let legal: MoveSet = candidates
            .iter()
            .copied()
            .filter(|&mv| {
                let mut scratch = self.board;
                scratch.relocate(mv.start(), mv.end(), piece);
                !king_attacked(&scratch, piece.color())
            })
            .collect();

        trace!(
            %start,
            candidates = candidates.len(),
            legal = legal.len(),
            "filtered legal moves"
        );
        legal
    }

    /// Return the union of the legal moves of every piece of `color`.
    pub fn all_valid_moves(&self, color: Color) -> MoveSet {
        self.board
            .pieces_of(color)
            .flat_map(|(pos, _)| self.valid_moves(pos))
            .collect()
    }

    /// Validate and play `mv` for the side to move, then pass the turn.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidMove`] describing the first failed check. The game
    /// is left unchanged in that case.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let result = self.commit(mv);
        if let Err(ref e) = result {
            debug!(%mv, error = %e, "move rejected");
        }
        result
    }

    fn commit(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let start = mv.start();
        let piece = self
            .board
            .piece_at(start)
            .ok_or(InvalidMove::NoPieceAtOrigin { position: start })?;

        let legal = self.valid_moves(start);
        if legal.is_empty() {
            return Err(InvalidMove::NoLegalMoves {
                position: start,
                piece,
            });
        }
        if piece.color() != self.turn {
            return Err(InvalidMove::NotYourTurn {
                piece,
                turn: self.turn,
            });
        }
        if !legal.contains(&mv) {
            return Err(InvalidMove::MoveNotLegal { mv });
        }

        let placed = match mv.promotion() {
            Some(promo) => Piece::new(piece.color(), promo.to_piece_kind()),
            None => piece,
        };
        let captured = self.board.relocate(start, mv.end(), placed);
        self.turn = self.turn.flip();

        debug!(%mv, piece = %placed, ?captured, next = %self.turn, "move committed");
        Ok(())
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.board, color)
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.all_valid_moves(color).is_empty()
    }

    /// Return `true` if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.all_valid_moves(color).is_empty()
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        let can_move = !self.all_valid_moves(self.turn).is_empty();
        match (in_check, can_move) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
