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

use std::fmt::{self, Write as _};

use crate::position::{Position, BOARD_SIZE};

/// An 8×8 matrix of booleans, one per square, indexed by row and column.
///
/// Used to mark the squares a piece can move to.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MoveMatrix([[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

impl MoveMatrix {
    pub const EMPTY: MoveMatrix = MoveMatrix([[false; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

    #[inline]
    pub fn get(&self, pos: Position) -> bool {
        self.0[usize::from(pos.row())][usize::from(pos.column())]
    }

    #[inline]
    pub fn set(&mut self, pos: Position) {
        self.0[usize::from(pos.row())][usize::from(pos.column())] = true;
    }

    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.0[usize::from(pos.row())][usize::from(pos.column())] = false;
    }

    /// Whether any square is marked.
    pub fn any(&self) -> bool {
        self.0.iter().flatten().any(|&marked| marked)
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().filter(|&&marked| marked).count()
    }

    /// Marked positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.get(pos))
    }
}

impl FromIterator<Position> for MoveMatrix {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> MoveMatrix {
        let mut matrix = MoveMatrix::EMPTY;
        for pos in iter {
            matrix.set(pos);
        }
        matrix
    }
}

impl fmt::Debug for MoveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (column, &marked) in row.iter().enumerate() {
                f.write_char(if marked { '1' } else { '.' })?;
                f.write_char(if column + 1 < row.len() { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}
