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

//! The match: turn order, move validation and special moves.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::{
    attacks,
    board::Board,
    castling_side::{Castles, CastlingSide},
    color::Color,
    errors::{IllegalMove, PlayError, PromotionError},
    m::{Move, MoveList},
    matrix::MoveMatrix,
    piece::{Piece, PieceId},
    position::{Position, BOARD_SIZE},
    role::Role,
};

/// Pieces on the back rows, from the a-file to the h-file.
const BACK_ROW: [Role; BOARD_SIZE as usize] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Column the kings start on.
const KING_COLUMN: u8 = 4;

/// Pieces removed from the board, in the order they were captured.
pub type CapturedPieces = ArrayVec<Piece, 32>;

/// A game of chess between two players, from the standard starting
/// position.
///
/// The match is changed only by [`Match::perform_move()`] and
/// [`Match::replace_promoted_piece()`]. Both either succeed or leave the
/// match exactly as it was.
///
/// # Examples
///
/// ```
/// use chessmatch::{ChessPosition, Color, Match};
///
/// let mut m = Match::new();
///
/// let e2: ChessPosition = "e2".parse()?;
/// let e4: ChessPosition = "e4".parse()?;
/// let captured = m.perform_move(e2, e4)?;
///
/// assert_eq!(captured, None);
/// assert_eq!(m.turn(), 2);
/// assert_eq!(m.current_player(), Color::Black);
/// assert!(!m.is_check());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// After a checkmate the turn is no longer advanced. The match does not
/// refuse further moves, so the caller should stop asking for them.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Match {
    board: Board,
    turn: u32,
    current_player: Color,
    check: bool,
    check_mate: bool,
    en_passant_vulnerable: Option<PieceId>,
    promoted: Option<PieceId>,
    captured: CapturedPieces,
    next_id: u32,
}

impl Default for Match {
    fn default() -> Match {
        Match::new()
    }
}

impl Match {
    /// Starts a match from the standard starting position, with White to
    /// move on turn 1.
    pub fn new() -> Match {
        let mut m = Match {
            board: Board::empty(),
            turn: 1,
            current_player: Color::White,
            check: false,
            check_mate: false,
            en_passant_vulnerable: None,
            promoted: None,
            captured: CapturedPieces::new(),
            next_id: 0,
        };
        m.initial_setup();
        m
    }

    fn initial_setup(&mut self) {
        for color in Color::ALL {
            let back_row = Position::all().filter(|pos| pos.row() == color.back_row());
            for pos in back_row {
                self.place_new_piece(pos, color, BACK_ROW[usize::from(pos.column())]);
            }
            let pawn_row = Position::all().filter(|pos| pos.row() == color.pawn_row());
            for pos in pawn_row {
                self.place_new_piece(pos, color, Role::Pawn);
            }
        }
    }

    fn next_piece_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    fn place_new_piece(&mut self, pos: Position, color: Color, role: Role) -> Piece {
        let piece = Piece::new(self.next_piece_id(), color, role, pos);
        self.board.place(piece, pos);
        piece
    }

    /// Number of the current ply, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Whether the last move put the opponent in check.
    pub fn is_check(&self) -> bool {
        self.check
    }

    pub fn is_check_mate(&self) -> bool {
        self.check_mate
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the board as `[row][column]`, for rendering.
    pub fn pieces(&self) -> [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        self.board.to_matrix()
    }

    /// Pieces in play, in the order they were placed on the board.
    pub fn pieces_on_board(&self) -> ArrayVec<Piece, 32> {
        let mut pieces: ArrayVec<Piece, 32> = self.board.pieces().copied().collect();
        pieces.sort_unstable_by_key(|piece| piece.id);
        pieces
    }

    fn pieces_of(&self, color: Color) -> ArrayVec<Piece, 16> {
        let mut pieces: ArrayVec<Piece, 16> = self
            .board
            .pieces()
            .filter(|piece| piece.color == color)
            .copied()
            .collect();
        pieces.sort_unstable_by_key(|piece| piece.id);
        pieces
    }

    /// Captured pieces of both colors, in the order they were captured.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Captured pieces of the given color.
    pub fn captured_by_color(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().filter(move |piece| piece.color == color)
    }

    fn find(&self, id: PieceId) -> Option<&Piece> {
        self.board.pieces().find(|piece| piece.id == id)
    }

    /// The pawn that advanced two squares on the last move and may be
    /// captured en passant right now.
    pub fn en_passant_vulnerable(&self) -> Option<Piece> {
        self.en_passant_vulnerable
            .and_then(|id| self.find(id))
            .copied()
    }

    fn en_passant_position(&self) -> Option<Position> {
        self.en_passant_vulnerable().map(|pawn| pawn.position)
    }

    /// The piece the last move promoted a pawn to, while it can still be
    /// exchanged with [`Match::replace_promoted_piece()`].
    pub fn promoted(&self) -> Option<Piece> {
        self.promoted.and_then(|id| self.find(id)).copied()
    }

    /// # Panics
    ///
    /// Panics if there is no king of the given color. Every match has
    /// exactly one king of each color, so this means the match is corrupt.
    fn king(&self, color: Color) -> Piece {
        match self
            .board
            .pieces()
            .find(|piece| piece.color == color && piece.role == Role::King)
        {
            Some(king) => *king,
            None => panic!("there is no {color} king on the board"),
        }
    }

    /// Whether any piece of color `by` attacks `pos`.
    pub fn is_attacked(&self, pos: Position, by: Color) -> bool {
        self.board
            .pieces()
            .filter(|piece| piece.color == by)
            .any(|piece| attacks::attacks(piece, &self.board).get(pos))
    }

    fn test_check(&self, color: Color) -> bool {
        self.is_attacked(self.king(color).position, !color)
    }

    /// Castling rights that still exist, judged by the move counters of the
    /// kings and rooks on their home squares.
    pub fn castling_rights(&self) -> Castles {
        let mut castles = Castles::empty();

        for color in Color::ALL {
            let Ok(king_home) = Position::new(color.back_row(), KING_COLUMN) else {
                continue;
            };
            let unmoved = |pos: Option<Position>, role: Role| {
                pos.and_then(|pos| self.board.piece(pos)).is_some_and(|piece| {
                    piece.color == color && piece.role == role && piece.move_count == 0
                })
            };
            if !unmoved(Some(king_home), Role::King) {
                continue;
            }
            for side in CastlingSide::ALL {
                if unmoved(side.rook_from(king_home), Role::Rook) {
                    castles |= Castles::of(color, side);
                }
            }
        }

        castles
    }

    /// Castling destinations of an unmoved king: the squares between king
    /// and rook are empty, the king is not in check and does not pass over
    /// an attacked square.
    fn castling_moves(&self, king: &Piece) -> MoveMatrix {
        let mut moves = MoveMatrix::EMPTY;

        if king.role != Role::King || king.move_count != 0 {
            return moves;
        }

        let rights = self.castling_rights();
        if !CastlingSide::ALL
            .iter()
            .any(|&side| rights.has(king.color, side))
            || self.test_check(king.color)
        {
            return moves;
        }

        for side in CastlingSide::ALL {
            if !rights.has(king.color, side) {
                continue;
            }

            let direction = side.direction();
            let between_empty = (1..side.rook_offset().abs()).all(|step| {
                king.position
                    .offset(0, step * direction)
                    .is_some_and(|pos| !self.board.there_is_a_piece(pos))
            });
            let path_safe = (1..=2).all(|step| {
                king.position
                    .offset(0, step * direction)
                    .is_some_and(|pos| !self.is_attacked(pos, !king.color))
            });

            if between_empty && path_safe {
                if let Some(to) = side.king_to(king.position) {
                    moves.set(to);
                }
            }
        }

        moves
    }

    /// Squares the piece can move to, ignoring self-check, including
    /// castling.
    fn piece_moves(&self, piece: &Piece) -> MoveMatrix {
        let mut moves = piece.possible_moves(&self.board, self.en_passant_position());
        if piece.role == Role::King {
            for to in self.castling_moves(piece).iter() {
                moves.set(to);
            }
        }
        moves
    }

    fn validate_source_position(&self, pos: Position) -> Result<&Piece, IllegalMove> {
        let piece = self.board.piece(pos).ok_or(IllegalMove::NoPiece)?;
        if piece.color != self.current_player {
            return Err(IllegalMove::NotYourPiece);
        }
        // a king that may castle can always step towards the rook
        if !piece.is_there_any_possible_move(&self.board, self.en_passant_position()) {
            return Err(IllegalMove::NoPossibleMoves);
        }
        Ok(piece)
    }

    fn validate_target_position(&self, source: Position, target: Position) -> Result<(), IllegalMove> {
        let piece = self.validate_source_position(source)?;
        if piece.possible_move(&self.board, self.en_passant_position(), target)
            || (piece.role == Role::King && self.castling_moves(piece).get(target))
        {
            Ok(())
        } else {
            Err(IllegalMove::InvalidTarget)
        }
    }

    /// Squares the piece on `source` could move to, for move hints.
    ///
    /// Moves that would leave the own king in check are included. They are
    /// rejected only when played.
    ///
    /// # Errors
    ///
    /// Fails like the source validation of [`Match::perform_move()`]: there
    /// is no piece on `source`, it belongs to the other player, or it can
    /// not move at all.
    pub fn possible_moves<P: Into<Position>>(&self, source: P) -> Result<MoveMatrix, IllegalMove> {
        let piece = self.validate_source_position(source.into())?;
        Ok(self.piece_moves(piece))
    }

    /// Validates and plays the move from `source` to `target`, returning the
    /// captured piece, if any.
    ///
    /// Accepts [`Position`]s and [`ChessPosition`](crate::ChessPosition)s.
    ///
    /// A pawn that reaches the last row is replaced by a queen right away.
    /// See [`Match::replace_promoted_piece()`] to choose another piece.
    ///
    /// # Errors
    ///
    /// * [`PlayError::IllegalMove`] if the move breaks the movement rules.
    /// * [`PlayError::SelfCheck`] if the move would leave the own king in
    ///   check.
    ///
    /// In both cases the match is unchanged.
    pub fn perform_move<S, T>(&mut self, source: S, target: T) -> Result<Option<Piece>, PlayError>
    where
        S: Into<Position>,
        T: Into<Position>,
    {
        let (source, target) = (source.into(), target.into());

        if let Err(reason) = self.validate_target_position(source, target) {
            debug!(%source, %target, %reason, "rejected illegal move");
            return Err(reason.into());
        }

        let mover = self.current_player;
        let captured = self.make_move(source, target);

        if self.test_check(mover) {
            self.undo_move(source, target, captured);
            debug!(%source, %target, "rejected move into check");
            return Err(PlayError::SelfCheck);
        }

        let moved = *self
            .board
            .piece(target)
            .expect("moved piece is on target square");
        trace!(turn = self.turn, %mover, %source, %target, captured = ?captured.map(|p| p.role), "performed move");

        self.promoted = None;
        if moved.role == Role::Pawn && target.row() == moved.color.promotion_row() {
            let queen = self.replace_piece(target, Role::Queen);
            debug!(%target, "promoted pawn to queen");
            self.promoted = Some(queen.id);
        }

        self.en_passant_vulnerable = (moved.role == Role::Pawn
            && source.row().abs_diff(target.row()) == 2)
            .then_some(moved.id);

        self.check = self.test_check(!mover);

        if self.test_check_mate(!mover) {
            self.check_mate = true;
            info!(turn = self.turn, winner = %mover, "checkmate");
        } else {
            self.next_turn();
        }

        Ok(captured)
    }

    /// Exchanges the piece a pawn was just promoted to.
    ///
    /// Check and checkmate are evaluated again for the new piece, as if the
    /// pawn had been promoted to it directly.
    ///
    /// # Errors
    ///
    /// * [`PromotionError::NoPendingPromotion`] unless the last move
    ///   promoted a pawn.
    /// * [`PromotionError::InvalidPromotionType`] unless `role` is a knight,
    ///   bishop, rook or queen.
    pub fn replace_promoted_piece(&mut self, role: Role) -> Result<Piece, PromotionError> {
        let promoted = self.promoted().ok_or(PromotionError::NoPendingPromotion)?;
        if !role.is_promotion() {
            return Err(PromotionError::InvalidPromotionType(role));
        }

        let piece = self.replace_piece(promoted.position, role);
        self.promoted = Some(piece.id);
        debug!(position = %piece.position, %role, "replaced promoted piece");

        let opponent = !piece.color;
        self.check = self.test_check(opponent);
        match (self.check_mate, self.test_check_mate(opponent)) {
            (true, false) => {
                self.check_mate = false;
                self.next_turn();
            }
            (false, true) => {
                self.check_mate = true;
                self.previous_turn();
                info!(turn = self.turn, winner = %piece.color, "checkmate");
            }
            _ => (),
        }

        Ok(piece)
    }

    fn replace_piece(&mut self, pos: Position, role: Role) -> Piece {
        let old = self.board.remove(pos).expect("piece to replace");
        self.place_new_piece(pos, old.color, role)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = !self.current_player;
    }

    fn previous_turn(&mut self) {
        self.turn -= 1;
        self.current_player = !self.current_player;
    }

    /// Moves the piece on `source` to `target` without any validation,
    /// including the rook of a castling move and the pawn taken en passant.
    fn make_move(&mut self, source: Position, target: Position) -> Option<Piece> {
        let mut moving = self.board.remove(source).expect("piece on source square");
        moving.increase_move_count();
        let mut captured = self.board.remove(target);
        self.board.place(moving, target);

        if moving.role == Role::King {
            if let Some(side) = CastlingSide::from_king_move(source, target) {
                if let (Some(rook_from), Some(rook_to)) = (side.rook_from(source), side.rook_to(source)) {
                    if let Some(mut rook) = self.board.remove(rook_from) {
                        rook.increase_move_count();
                        self.board.place(rook, rook_to);
                    }
                }
            }
        }

        if moving.role == Role::Pawn && source.column() != target.column() && captured.is_none() {
            captured = target
                .offset(-moving.color.forward(), 0)
                .and_then(|pawn| self.board.remove(pawn));
        }

        if let Some(piece) = captured {
            self.captured.push(piece);
        }

        captured
    }

    /// Exact inverse of [`Match::make_move()`].
    fn undo_move(&mut self, source: Position, target: Position, captured: Option<Piece>) {
        let mut moving = self.board.remove(target).expect("moved piece on target square");
        moving.decrease_move_count();
        self.board.place(moving, source);

        if let Some(piece) = captured {
            if let Some(index) = self.captured.iter().rposition(|c| c.id == piece.id) {
                self.captured.remove(index);
            }
            // a pawn taken en passant was not standing on the target square
            self.board.place(piece, piece.position);
        }

        if moving.role == Role::King {
            if let Some(side) = CastlingSide::from_king_move(source, target) {
                if let (Some(rook_from), Some(rook_to)) = (side.rook_from(source), side.rook_to(source)) {
                    if let Some(mut rook) = self.board.remove(rook_to) {
                        rook.decrease_move_count();
                        self.board.place(rook, rook_from);
                    }
                }
            }
        }
    }

    /// Tries the move and reports whether it keeps the king of `color` out
    /// of check. The match is restored afterwards.
    fn is_safe(&mut self, color: Color, m: Move) -> bool {
        let captured = self.make_move(m.from, m.to);
        let safe = !self.test_check(color);
        self.undo_move(m.from, m.to, captured);
        safe
    }

    /// Whether `color` is in check and every move of every piece, tried in
    /// placement order and row-major destination order, leaves it in check.
    fn test_check_mate(&mut self, color: Color) -> bool {
        if !self.test_check(color) {
            return false;
        }

        for piece in self.pieces_of(color) {
            let moves = self.piece_moves(&piece);
            for to in moves.iter() {
                if self.is_safe(color, Move::new(piece.position, to)) {
                    return false;
                }
            }
        }

        true
    }

    /// Moves of the current player that do not leave their own king in
    /// check.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessmatch::Match;
    ///
    /// assert_eq!(Match::new().legal_moves().len(), 20);
    /// ```
    pub fn legal_moves(&self) -> MoveList {
        let mut scratch = self.clone();
        let color = self.current_player;
        let mut legals = MoveList::new();

        for piece in self.pieces_of(color) {
            for to in self.piece_moves(&piece).iter() {
                let m = Move::new(piece.position, to);
                if scratch.is_safe(color, m) {
                    legals.push(m);
                }
            }
        }

        legals
    }

    /// Whether [`Match::perform_move()`] would accept the move.
    pub fn is_legal<S, T>(&self, source: S, target: T) -> bool
    where
        S: Into<Position>,
        T: Into<Position>,
    {
        let m = Move::new(source.into(), target.into());
        self.legal_moves().contains(&m)
    }
}
