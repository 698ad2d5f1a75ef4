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

//! Movement rules of each piece type.
//!
//! The generated moves ignore whether they leave the own king in check.
//! Filtering those out is the job of the [`Match`](crate::Match), which
//! applies the same trial move simulation to every piece type.
//!
//! # Example
//!
//! ```
//! use chessmatch::{attacks, Match, Position};
//!
//! let m = Match::new();
//! let g1 = Position::new(7, 6)?;
//! let knight = m.board().piece(g1).expect("knight on g1");
//!
//! let moves = attacks::possible_moves(knight, m.board(), None);
//! // f3 and h3
//! assert_eq!(moves.count(), 2);
//! assert!(moves.get(Position::new(5, 5)?));
//! assert!(moves.get(Position::new(5, 7)?));
//! # Ok::<_, chessmatch::OutOfBounds>(())
//! ```

use crate::{
    board::Board, color::Color, matrix::MoveMatrix, piece::Piece, position::Position, role::Role,
};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];
const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

/// Projects rays from `from` until they hit the edge of the board or an
/// occupied square. The occupied square is included.
fn sliding_attacks(from: Position, board: &Board, directions: &[(i8, i8)]) -> MoveMatrix {
    let mut attacks = MoveMatrix::EMPTY;

    for &(rows, columns) in directions {
        let mut current = from;
        while let Some(next) = current.offset(rows, columns) {
            attacks.set(next);
            if board.there_is_a_piece(next) {
                break;
            }
            current = next;
        }
    }

    attacks
}

fn stepping_attacks(from: Position, offsets: &[(i8, i8)]) -> MoveMatrix {
    offsets
        .iter()
        .filter_map(|&(rows, columns)| from.offset(rows, columns))
        .collect()
}

/// Squares a pawn of the given color standing on `from` attacks.
pub fn pawn_attacks(color: Color, from: Position) -> MoveMatrix {
    stepping_attacks(from, &[(color.forward(), -1), (color.forward(), 1)])
}

/// Squares attacked by `piece` from its current position, regardless of
/// what stands on them.
///
/// Sliding pieces stop at the first occupied square of each ray, including
/// it. Pawns attack only diagonally forward.
pub fn attacks(piece: &Piece, board: &Board) -> MoveMatrix {
    let from = piece.position;
    match piece.role {
        Role::Pawn => pawn_attacks(piece.color, from),
        Role::Knight => stepping_attacks(from, &KNIGHT_OFFSETS),
        Role::Bishop => sliding_attacks(from, board, &BISHOP_DIRECTIONS),
        Role::Rook => sliding_attacks(from, board, &ROOK_DIRECTIONS),
        Role::Queen => sliding_attacks(from, board, &QUEEN_DIRECTIONS),
        Role::King => stepping_attacks(from, &KING_OFFSETS),
    }
}

/// Squares `piece` could move to, ignoring self-check.
///
/// `en_passant` is the position of the pawn that just advanced two squares,
/// if any. Castling is not generated here, because it depends on the
/// history of two pieces.
pub fn possible_moves(piece: &Piece, board: &Board, en_passant: Option<Position>) -> MoveMatrix {
    match piece.role {
        Role::Pawn => pawn_moves(piece, board, en_passant),
        _ => {
            let attacked = attacks(piece, board);
            let mut moves = attacked;
            for target in attacked.iter() {
                if board.piece(target).is_some_and(|p| p.color == piece.color) {
                    moves.clear(target);
                }
            }
            moves
        }
    }
}

fn pawn_moves(pawn: &Piece, board: &Board, en_passant: Option<Position>) -> MoveMatrix {
    let mut moves = MoveMatrix::EMPTY;
    let from = pawn.position;
    let forward = pawn.color.forward();

    if let Some(single) = from.offset(forward, 0) {
        if !board.there_is_a_piece(single) {
            moves.set(single);

            if from.row() == pawn.color.pawn_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if !board.there_is_a_piece(double) {
                        moves.set(double);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };

        if board.piece(target).is_some_and(|p| p.is_opponent(pawn)) {
            moves.set(target);
        }

        let beside = from.offset(0, side);
        if beside.is_some()
            && beside == en_passant
            && !board.there_is_a_piece(target)
            && beside
                .and_then(|pos| board.piece(pos))
                .is_some_and(|p| p.role == Role::Pawn && p.is_opponent(pawn))
        {
            moves.set(target);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceId;

    fn pos(s: &str) -> Position {
        s.parse::<crate::ChessPosition>().unwrap().to_position()
    }

    struct Setup {
        board: Board,
        next_id: u32,
    }

    impl Setup {
        fn new() -> Setup {
            Setup {
                board: Board::empty(),
                next_id: 0,
            }
        }

        fn put(&mut self, square: &str, color: Color, role: Role) -> Piece {
            let piece = Piece::new(PieceId(self.next_id), color, role, pos(square));
            self.next_id += 1;
            self.board.place(piece, pos(square));
            piece
        }
    }

    fn squares(matrix: MoveMatrix) -> Vec<String> {
        let mut squares: Vec<_> = matrix.iter().map(|p| p.to_string()).collect();
        squares.sort();
        squares
    }

    #[test]
    fn test_rook_stops_at_blockers() {
        let mut s = Setup::new();
        let rook = s.put("d4", Color::White, Role::Rook);
        s.put("d6", Color::White, Role::Pawn);
        s.put("f4", Color::Black, Role::Knight);

        let moves = possible_moves(&rook, &s.board, None);
        assert_eq!(
            squares(moves),
            ["a4", "b4", "c4", "d1", "d2", "d3", "d5", "e4", "f4"]
        );

        // own pieces are attacked (defended) but not reachable
        assert!(attacks(&rook, &s.board).get(pos("d6")));
        assert!(!moves.get(pos("d6")));
    }

    #[test]
    fn test_bishop_and_queen() {
        let mut s = Setup::new();
        let bishop = s.put("a1", Color::Black, Role::Bishop);
        s.put("c3", Color::White, Role::Pawn);
        assert_eq!(squares(possible_moves(&bishop, &s.board, None)), ["b2", "c3"]);

        let mut s = Setup::new();
        let queen = s.put("d4", Color::White, Role::Queen);
        assert_eq!(possible_moves(&queen, &s.board, None).count(), 27);
    }

    #[test]
    fn test_knight_in_corner() {
        let mut s = Setup::new();
        let knight = s.put("h8", Color::White, Role::Knight);
        s.put("f7", Color::White, Role::Pawn);
        assert_eq!(squares(possible_moves(&knight, &s.board, None)), ["g6"]);
    }

    #[test]
    fn test_king_has_no_castling_moves() {
        let mut s = Setup::new();
        let king = s.put("e1", Color::White, Role::King);
        s.put("h1", Color::White, Role::Rook);
        s.put("d2", Color::Black, Role::Pawn);
        assert_eq!(
            squares(possible_moves(&king, &s.board, None)),
            ["d1", "d2", "e2", "f1", "f2"]
        );
    }

    #[test]
    fn test_pawn_pushes() {
        let mut s = Setup::new();
        let white = s.put("e2", Color::White, Role::Pawn);
        let black = s.put("c7", Color::Black, Role::Pawn);
        assert_eq!(squares(possible_moves(&white, &s.board, None)), ["e3", "e4"]);
        assert_eq!(squares(possible_moves(&black, &s.board, None)), ["c5", "c6"]);

        // blocked on the second square
        s.put("e4", Color::Black, Role::Knight);
        assert_eq!(squares(possible_moves(&white, &s.board, None)), ["e3"]);

        // blocked on the first square
        s.put("c6", Color::White, Role::Knight);
        assert!(!possible_moves(&black, &s.board, None).any());
    }

    #[test]
    fn test_pawn_no_double_push_off_start_row() {
        let mut s = Setup::new();
        let pawn = s.put("e3", Color::White, Role::Pawn);
        assert_eq!(squares(possible_moves(&pawn, &s.board, None)), ["e4"]);
    }

    #[test]
    fn test_pawn_captures() {
        let mut s = Setup::new();
        let pawn = s.put("e4", Color::White, Role::Pawn);
        s.put("d5", Color::Black, Role::Knight);
        s.put("f5", Color::White, Role::Knight);
        assert_eq!(squares(possible_moves(&pawn, &s.board, None)), ["d5", "e5"]);
        assert_eq!(squares(attacks(&pawn, &s.board)), ["d5", "f5"]);
    }

    #[test]
    fn test_en_passant() {
        let mut s = Setup::new();
        let white = s.put("e5", Color::White, Role::Pawn);
        s.put("d5", Color::Black, Role::Pawn);
        s.put("f5", Color::Black, Role::Pawn);
        s.put("f6", Color::Black, Role::Rook);

        assert_eq!(squares(possible_moves(&white, &s.board, None)), ["e6", "f6"]);
        assert_eq!(
            squares(possible_moves(&white, &s.board, Some(pos("d5")))),
            ["d6", "e6", "f6"]
        );
        // only the pawn that just advanced can be taken en passant
        assert_eq!(
            squares(possible_moves(&white, &s.board, Some(pos("a5")))),
            ["e6", "f6"]
        );
    }

    #[test]
    fn test_en_passant_needs_opponent_pawn() {
        let mut s = Setup::new();
        let black = s.put("d4", Color::Black, Role::Pawn);
        s.put("e4", Color::Black, Role::Pawn);
        assert_eq!(
            squares(possible_moves(&black, &s.board, Some(pos("e4")))),
            ["d3"]
        );
    }
}
