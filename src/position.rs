// This file is part of the chessmatch library.
// Copyright (C) 2024 The chessmatch developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt};

use crate::chess_position::ChessPosition;

/// Number of rows and columns of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8×8 grid, addressed by zero-based row and column.
///
/// Row 0 is the eighth rank (Black's back row), column 0 is the a-file.
/// Positions are numbered row-major:
///
/// ```text
///     a  b  c  d  e  f  g  h
/// 8 | 0  1  2  3  4  5  6  7  | 8
/// 7 | 8  9  10 11 12 13 14 15 | 7
/// ...
/// 1 | 56 57 58 59 60 61 62 63 | 1
/// ```
///
/// Every value of this type is on the board. Coordinates outside the grid
/// are rejected when the position is constructed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(u8);

impl Position {
    /// Creates a position from a row and a column.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate is not in `0..8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessmatch::Position;
    ///
    /// let e2 = Position::new(6, 4)?;
    /// assert_eq!(e2.to_string(), "e2");
    ///
    /// assert!(Position::new(8, 0).is_err());
    /// # Ok::<_, chessmatch::OutOfBounds>(())
    /// ```
    pub const fn new(row: u8, column: u8) -> Result<Position, OutOfBounds> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Ok(Position(row * BOARD_SIZE + column))
        } else {
            Err(OutOfBounds)
        }
    }

    /// Like [`Position::new()`], but for signed coordinates that may have
    /// been computed by stepping off the board.
    pub const fn from_coords(row: i8, column: i8) -> Option<Position> {
        if 0 <= row && row < BOARD_SIZE as i8 && 0 <= column && column < BOARD_SIZE as i8 {
            Some(Position(row as u8 * BOARD_SIZE + column as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Steps `rows` down and `columns` to the right, or `None` if that
    /// leaves the board.
    #[inline]
    pub const fn offset(self, rows: i8, columns: i8) -> Option<Position> {
        Position::from_coords(self.row() as i8 + rows, self.column() as i8 + columns)
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ChessPosition::from_position(*self), f)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cp = ChessPosition::from_position(*self);
        write!(f, "{}{}", cp.file().to_ascii_uppercase(), cp.rank())
    }
}

impl From<ChessPosition> for Position {
    fn from(cp: ChessPosition) -> Position {
        cp.to_position()
    }
}

/// Error when a row or column lies outside the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutOfBounds;

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("position is not on the board")
    }
}

impl Error for OutOfBounds {}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&ChessPosition::from_position(*self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <ChessPosition as serde::Deserialize>::deserialize(deserializer).map(ChessPosition::to_position)
    }
}
