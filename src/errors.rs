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

use crate::role::Role;

/// Why a move was rejected before it was tried on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IllegalMove {
    /// There is no piece on the source position.
    NoPiece,
    /// The piece on the source position belongs to the other player.
    NotYourPiece,
    /// The piece on the source position has nowhere to go.
    NoPossibleMoves,
    /// The piece can not move to the target position.
    InvalidTarget,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalMove::NoPiece => "there is no piece on source position",
            IllegalMove::NotYourPiece => "the chosen piece is not yours",
            IllegalMove::NoPossibleMoves => "there are no possible moves for the chosen piece",
            IllegalMove::InvalidTarget => "the chosen piece can't move to target position",
        })
    }
}

impl Error for IllegalMove {}

/// Error when a move can not be played. The match is left unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// The move breaks the movement rules.
    IllegalMove(IllegalMove),
    /// The move would leave the own king in check. The trial move has been
    /// undone.
    SelfCheck,
}

impl From<IllegalMove> for PlayError {
    fn from(reason: IllegalMove) -> PlayError {
        PlayError::IllegalMove(reason)
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
            PlayError::SelfCheck => f.write_str("you can't put yourself in check"),
        }
    }
}

impl Error for PlayError {}

/// Error when replacing a promoted piece.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PromotionError {
    /// The last move did not promote a pawn.
    NoPendingPromotion,
    /// Pawns can only become a knight, bishop, rook or queen.
    InvalidPromotionType(Role),
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::NoPendingPromotion => f.write_str("there is no piece to be promoted"),
            PromotionError::InvalidPromotionType(role) => {
                write!(f, "invalid type for promotion: {role}")
            }
        }
    }
}

impl Error for PromotionError {}
