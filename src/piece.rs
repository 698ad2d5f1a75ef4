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

use std::fmt;

use crate::{attacks, board::Board, color::Color, matrix::MoveMatrix, position::Position, role::Role};

/// Identity of a piece within one match.
///
/// Ids are handed out in the order pieces are created, so sorting pieces by
/// id gives the order in which they were placed on the board.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PieceId(pub(crate) u32);

/// A piece with [`Color`], [`Role`] and move history.
///
/// This is a snapshot. The board owns the piece while it is placed, the list
/// of captured pieces owns it after a capture.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub role: Role,
    /// Number of moves this piece has made, including being moved as the
    /// rook of a castling move.
    pub move_count: u32,
    /// Where the piece was last placed. For captured pieces this is the
    /// square they were captured on.
    pub position: Position,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, color: Color, role: Role, position: Position) -> Piece {
        Piece {
            id,
            color,
            role,
            move_count: 0,
            position,
        }
    }

    /// Uppercase letter for white pieces, lowercase for black pieces.
    pub const fn char(&self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Squares this piece could move to, ignoring self-check.
    ///
    /// See [`attacks::possible_moves()`].
    pub fn possible_moves(&self, board: &Board, en_passant: Option<Position>) -> MoveMatrix {
        attacks::possible_moves(self, board, en_passant)
    }

    pub fn possible_move(
        &self,
        board: &Board,
        en_passant: Option<Position>,
        target: Position,
    ) -> bool {
        self.possible_moves(board, en_passant).get(target)
    }

    pub fn is_there_any_possible_move(&self, board: &Board, en_passant: Option<Position>) -> bool {
        self.possible_moves(board, en_passant).any()
    }

    #[inline]
    pub fn is_opponent(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "move count of {self} would underflow");
        self.move_count = self.move_count.saturating_sub(1);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.role, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position::ChessPosition;

    fn pos(s: &str) -> Position {
        s.parse::<ChessPosition>().unwrap().to_position()
    }

    fn put(board: &mut Board, id: u32, square: &str, color: Color, role: Role) -> Piece {
        let piece = Piece::new(PieceId(id), color, role, pos(square));
        board.place(piece, pos(square));
        piece
    }

    #[test]
    fn test_possible_move_with_en_passant() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 0, "d4", Color::Black, Role::Pawn);
        put(&mut board, 1, "e4", Color::White, Role::Pawn);

        assert!(pawn.possible_move(&board, Some(pos("e4")), pos("e3")));
        assert!(pawn.possible_move(&board, Some(pos("e4")), pos("d3")));
        assert!(!pawn.possible_move(&board, None, pos("e3")));
        assert!(!pawn.possible_move(&board, None, pos("d2")));
        assert!(pawn.is_there_any_possible_move(&board, None));
    }

    #[test]
    fn test_blocked_piece_has_no_possible_move() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 0, "d4", Color::Black, Role::Pawn);
        put(&mut board, 1, "d3", Color::White, Role::Rook);
        assert!(!pawn.is_there_any_possible_move(&board, None));

        let rook = put(&mut board, 2, "a1", Color::White, Role::Rook);
        put(&mut board, 3, "a2", Color::White, Role::Pawn);
        put(&mut board, 4, "b1", Color::White, Role::Knight);
        assert!(!rook.is_there_any_possible_move(&board, None));
        assert!(!rook.possible_move(&board, None, pos("a2")));
    }
}
