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

//! Piece placement without chess semantics.

use std::fmt::{self, Write as _};

use crate::{
    piece::Piece,
    position::{Position, BOARD_SIZE},
};

const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// An 8×8 grid holding at most one piece per square.
///
/// The board keeps the [`Piece::position`] of every placed piece consistent
/// with the square it occupies.
///
/// # Examples
///
/// ```
/// use chessmatch::{Match, Position};
///
/// let m = Match::new();
/// let board = m.board();
///
/// let e1 = Position::new(7, 4)?;
/// assert_eq!(board.piece(e1).map(|p| p.char()), Some('K'));
/// assert!(!board.there_is_a_piece(Position::new(4, 4)?));
/// # Ok::<_, chessmatch::OutOfBounds>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    pub const fn empty() -> Board {
        Board { cells: [None; CELLS] }
    }

    #[inline]
    pub fn piece(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.index()].as_ref()
    }

    #[inline]
    pub fn there_is_a_piece(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_some()
    }

    /// Places a piece on an empty square and records the square on the
    /// piece.
    pub fn place(&mut self, mut piece: Piece, pos: Position) {
        debug_assert!(
            self.cells[pos.index()].is_none(),
            "there is already a piece on {pos}"
        );
        piece.position = pos;
        self.cells[pos.index()] = Some(piece);
    }

    /// Detaches and returns the piece on the given square, if any.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()].take()
    }

    /// All pieces on the board, in row-major order of their squares.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Snapshot of the grid as `[row][column]`, for rendering.
    pub fn to_matrix(&self) -> [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut matrix = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for pos in Position::all() {
            matrix[usize::from(pos.row())][usize::from(pos.column())] = self.cells[pos.index()];
        }
        matrix
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for column in 0..BOARD_SIZE {
                let square = Position::new(row, column).map_err(|_| fmt::Error)?;
                f.write_char(self.piece(square).map_or('-', Piece::char))?;
                f.write_char(' ')?;
            }
            f.write_char('\n')?;
        }
        f.write_str("  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
