//! Board coordinates.

use std::fmt;

/// A square on the board, addressed by row and column, both 1-based.
///
/// Row 1 is White's back rank and column 1 is the a-file. Stored as a single
/// index `(row - 1) * 8 + (column - 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(u8);

impl Position {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a position, returning `None` unless both coordinates are in `1..=8`.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Position> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Position::at(row, column))
        } else {
            None
        }
    }

    /// Build a position from coordinates already known to be on the board.
    #[inline]
    const fn at(row: u8, column: u8) -> Position {
        debug_assert!(row >= 1 && row <= 8 && column >= 1 && column <= 8);
        Position((row - 1) * 8 + (column - 1))
    }

    /// Parse a coordinate such as `"e4"` into a position.
    pub fn from_coordinate(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Position::new(rank - b'0', file - b'a' + 1)
    }

    /// Return the row (1..=8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8 + 1
    }

    /// Return the column (1..=8).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Return the zero-based grid index (0..64).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by `(d_row, d_column)`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let row = self.row() as i8 + d_row;
        let column = self.column() as i8 + d_column;
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Position::at(row as u8, column as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, row by row from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(Position)
    }

    // Named square constants
    pub const A1: Position = Position::at(1, 1);
    pub const B1: Position = Position::at(1, 2);
    pub const C1: Position = Position::at(1, 3);
    pub const D1: Position = Position::at(1, 4);
    pub const E1: Position = Position::at(1, 5);
    pub const F1: Position = Position::at(1, 6);
    pub const G1: Position = Position::at(1, 7);
    pub const H1: Position = Position::at(1, 8);
    pub const A2: Position = Position::at(2, 1);
    pub const B2: Position = Position::at(2, 2);
    pub const C2: Position = Position::at(2, 3);
    pub const D2: Position = Position::at(2, 4);
    pub const E2: Position = Position::at(2, 5);
    pub const F2: Position = Position::at(2, 6);
    pub const G2: Position = Position::at(2, 7);
    pub const H2: Position = Position::at(2, 8);
    pub const A3: Position = Position::at(3, 1);
    pub const B3: Position = Position::at(3, 2);
    pub const C3: Position = Position::at(3, 3);
    pub const D3: Position = Position::at(3, 4);
    pub const E3: Position = Position::at(3, 5);
    pub const F3: Position = Position::at(3, 6);
    pub const G3: Position = Position::at(3, 7);
    pub const H3: Position = Position::at(3, 8);
    pub const A4: Position = Position::at(4, 1);
    pub const B4: Position = Position::at(4, 2);
    pub const C4: Position = Position::at(4, 3);
    pub const D4: Position = Position::at(4, 4);
    pub const E4: Position = Position::at(4, 5);
    pub const F4: Position = Position::at(4, 6);
    pub const G4: Position = Position::at(4, 7);
    pub const H4: Position = Position::at(4, 8);
    pub const A5: Position = Position::at(5, 1);
    pub const B5: Position = Position::at(5, 2);
    pub const C5: Position = Position::at(5, 3);
    pub const D5: Position = Position::at(5, 4);
    pub const E5: Position = Position::at(5, 5);
    pub const F5: Position = Position::at(5, 6);
    pub const G5: Position = Position::at(5, 7);
    pub const H5: Position = Position::at(5, 8);
    pub const A6: Position = Position::at(6, 1);
    pub const B6: Position = Position::at(6, 2);
    pub const C6: Position = Position::at(6, 3);
    pub const D6: Position = Position::at(6, 4);
    pub const E6: Position = Position::at(6, 5);
    pub const F6: Position = Position::at(6, 6);
    pub const G6: Position = Position::at(6, 7);
    pub const H6: Position = Position::at(6, 8);
    pub const A7: Position = Position::at(7, 1);
    pub const B7: Position = Position::at(7, 2);
    pub const C7: Position = Position::at(7, 3);
    pub const D7: Position = Position::at(7, 4);
    pub const E7: Position = Position::at(7, 5);
    pub const F7: Position = Position::at(7, 6);
    pub const G7: Position = Position::at(7, 7);
    pub const H7: Position = Position::at(7, 8);
    pub const A8: Position = Position::at(8, 1);
    pub const B8: Position = Position::at(8, 2);
    pub const C8: Position = Position::at(8, 3);
    pub const D8: Position = Position::at(8, 4);
    pub const E8: Position = Position::at(8, 5);
    pub const F8: Position = Position::at(8, 6);
    pub const G8: Position = Position::at(8, 7);
    pub const H8: Position = Position::at(8, 8);
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column() - 1) as char;
        write!(f, "{}{}", file, self.row())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}
