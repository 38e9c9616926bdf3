//! Placement strings for loading positions.
//!
//! A [`Board`] reads and writes the piece-placement field of FEN. A [`Game`]
//! additionally reads the side-to-move field. Full six-field FEN is accepted
//! for convenience, but castling, en passant and the move counters are not
//! modeled, so those fields are ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::game::Game;
use crate::piece::Piece;
use crate::position::Position;

/// The standard starting position in FEN.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // Placement lists row 8 first.
        let row = 8 - rank_index as u8;
        let mut column: u8 = 1;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                column += digit as u8;
                if column > 9 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: column as usize - 1,
                    });
                }
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let pos = Position::new(row, column).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: column as usize,
                })?;
                board.set_piece(pos, Some(piece));
                column += 1;
            }
        }

        if column != 9 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: column as usize - 1,
            });
        }
    }

    Ok(board)
}

fn parse_color(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::InvalidColor {
            found: other.to_string(),
        }),
    }
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse a bare placement field such as `"8/8/8/4k3/8/8/8/4K3"`.
    fn from_str(s: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        match fields.as_slice() {
            [placement] => parse_placement(placement),
            _ => Err(FenError::WrongFieldCount { found: fields.len() }),
        }
    }
}

impl FromStr for Game {
    type Err = FenError;

    /// Parse `"<placement> <w|b>"`, or a full FEN whose trailing fields are ignored.
    ///
    /// A bare placement gives White the move.
    fn from_str(s: &str) -> Result<Game, FenError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let (placement, turn) = match fields.as_slice() {
            [placement] => (*placement, Color::White),
            [placement, color] | [placement, color, _, _, _, _] => (*placement, parse_color(color)?),
            _ => return Err(FenError::WrongFieldCount { found: fields.len() }),
        };
        Ok(Game::with_board(parse_placement(placement)?, turn))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1u8..=8).rev() {
            let mut empty_count = 0u8;

            for column in 1u8..=8 {
                match Position::new(row, column).and_then(|pos| self.piece_at(pos)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row > 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board(), self.turn().fen_char())
    }
}
