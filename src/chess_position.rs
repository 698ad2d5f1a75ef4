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

//! Algebraic coordinates like `e2`.

use std::{error::Error, fmt, str::FromStr};

use crate::position::{Position, BOARD_SIZE};

/// A file letter (`a` to `h`) and a rank number (`1` to `8`).
///
/// This is the only coordinate form users see. It converts to a [`Position`]
/// with `row = 8 - rank` and `column = file - 'a'`.
///
/// # Examples
///
/// ```
/// use chessmatch::{ChessPosition, Position};
///
/// let e2 = ChessPosition::new('e', 2)?;
/// assert_eq!(e2.to_position(), Position::new(6, 4)?);
///
/// let parsed: ChessPosition = "e2".parse()?;
/// assert_eq!(parsed, e2);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChessPosition {
    file: char,
    rank: u8,
}

impl ChessPosition {
    /// Validates a file letter and rank number.
    ///
    /// # Errors
    ///
    /// Returns [`ParseChessPositionError`] unless `file` is in `a..=h` and
    /// `rank` is in `1..=8`.
    pub const fn new(file: char, rank: u8) -> Result<ChessPosition, ParseChessPositionError> {
        if 'a' <= file && file <= 'h' && 1 <= rank && rank <= BOARD_SIZE {
            Ok(ChessPosition { file, rank })
        } else {
            Err(ParseChessPositionError)
        }
    }

    /// Parses an algebraic coordinate from ASCII, for example `b"e2"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseChessPositionError`] if the input is not a file
    /// letter followed by a rank number on the board.
    pub fn from_ascii(s: &[u8]) -> Result<ChessPosition, ParseChessPositionError> {
        let (&file, rank) = s.split_first().ok_or(ParseChessPositionError)?;
        let rank = btoi::btou::<u8>(rank).map_err(|_| ParseChessPositionError)?;
        ChessPosition::new(char::from(file), rank)
    }

    pub const fn from_position(pos: Position) -> ChessPosition {
        ChessPosition {
            file: (b'a' + pos.column()) as char,
            rank: BOARD_SIZE - pos.row(),
        }
    }

    #[inline]
    pub const fn file(self) -> char {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub fn to_position(self) -> Position {
        let row = BOARD_SIZE - self.rank;
        let column = self.file as u8 - b'a';
        match Position::new(row, column) {
            Ok(pos) => pos,
            Err(_) => unreachable!("validated chess position {self} is on the board"),
        }
    }
}

impl From<Position> for ChessPosition {
    fn from(pos: Position) -> ChessPosition {
        ChessPosition::from_position(pos)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// Error when parsing an invalid algebraic coordinate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseChessPositionError;

impl fmt::Display for ParseChessPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid chess position, valid values are from a1 to h8")
    }
}

impl Error for ParseChessPositionError {}

impl FromStr for ChessPosition {
    type Err = ParseChessPositionError;

    fn from_str(s: &str) -> Result<ChessPosition, ParseChessPositionError> {
        ChessPosition::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChessPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use fmt::Write as _;

        let mut s = arrayvec::ArrayString::<2>::new();
        let _ = write!(s, "{self}");
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChessPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ChessPositionVisitor;

        impl serde::de::Visitor<'_> for ChessPositionVisitor {
            type Value = ChessPosition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("algebraic coordinate like e2")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ChessPositionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position() {
        let a8 = ChessPosition::new('a', 8).unwrap();
        assert_eq!(a8.to_position(), Position::new(0, 0).unwrap());
        let h1 = ChessPosition::new('h', 1).unwrap();
        assert_eq!(h1.to_position(), Position::new(7, 7).unwrap());
    }

    #[test]
    fn test_roundtrip_all_positions() {
        for pos in Position::all() {
            assert_eq!(ChessPosition::from_position(pos).to_position(), pos);
        }
    }

    #[test]
    fn test_invalid() {
        assert_eq!(ChessPosition::new('i', 1), Err(ParseChessPositionError));
        assert_eq!(ChessPosition::new('a', 0), Err(ParseChessPositionError));
        assert_eq!(ChessPosition::new('a', 9), Err(ParseChessPositionError));
        assert_eq!(ChessPosition::new('A', 1), Err(ParseChessPositionError));
    }

    #[test]
    fn test_parse() {
        assert_eq!("e2".parse(), ChessPosition::new('e', 2));
        assert_eq!("h8".parse(), ChessPosition::new('h', 8));
        for invalid in ["", "e", "e0", "e9", "e10", "z1", "2e", "e+2", "e2 "] {
            assert_eq!(
                invalid.parse::<ChessPosition>(),
                Err(ParseChessPositionError),
                "{invalid:?}"
            );
        }
    }
}
