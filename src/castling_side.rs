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

use crate::{color::Color, position::Position};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /// Recognizes a castling move by the king moving exactly two columns
    /// along its row.
    pub const fn from_king_move(from: Position, to: Position) -> Option<CastlingSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.column() as i8 - from.column() as i8 {
            2 => Some(CastlingSide::KingSide),
            -2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    /// Column step from the king towards the rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::KingSide => 1,
            CastlingSide::QueenSide => -1,
        }
    }

    /// Column offset of the rook's home square, relative to the king's home
    /// square.
    #[inline]
    pub const fn rook_offset(self) -> i8 {
        match self {
            CastlingSide::KingSide => 3,
            CastlingSide::QueenSide => -4,
        }
    }

    /// Where the rook starts, given the square the king castles from.
    pub const fn rook_from(self, king_from: Position) -> Option<Position> {
        king_from.offset(0, self.rook_offset())
    }

    /// Where the rook ends up: next to the king, on the side of the king's
    /// origin.
    pub const fn rook_to(self, king_from: Position) -> Option<Position> {
        king_from.offset(0, self.direction())
    }

    /// Where the king ends up.
    pub const fn king_to(self, king_from: Position) -> Option<Position> {
        king_from.offset(0, 2 * self.direction())
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

bitflags::bitflags! {
    /// Castling rights of both sides.
    ///
    /// A right exists while the king and the corresponding rook have not
    /// moved from their home squares.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct Castles: u8 {
        const WHITE_KING_SIDE = 1 << 0;
        const WHITE_QUEEN_SIDE = 1 << 1;
        const BLACK_KING_SIDE = 1 << 2;
        const BLACK_QUEEN_SIDE = 1 << 3;

        const WHITE = Self::WHITE_KING_SIDE.bits() | Self::WHITE_QUEEN_SIDE.bits();
        const BLACK = Self::BLACK_KING_SIDE.bits() | Self::BLACK_QUEEN_SIDE.bits();
    }
}

impl Castles {
    pub const fn of(color: Color, side: CastlingSide) -> Castles {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => Castles::WHITE_KING_SIDE,
            (Color::White, CastlingSide::QueenSide) => Castles::WHITE_QUEEN_SIDE,
            (Color::Black, CastlingSide::KingSide) => Castles::BLACK_KING_SIDE,
            (Color::Black, CastlingSide::QueenSide) => Castles::BLACK_QUEEN_SIDE,
        }
    }

    #[inline]
    pub fn has(self, color: Color, side: CastlingSide) -> bool {
        self.contains(Castles::of(color, side))
    }
}
