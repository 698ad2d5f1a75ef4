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

//! A library for playing a two-player game of chess by the standard rules.
//!
//! # Examples
//!
//! Play moves, given in algebraic coordinates:
//!
//! ```
//! use chessmatch::{ChessPosition, Color, Match};
//!
//! let mut m = Match::new();
//!
//! // 1. e4
//! let e2: ChessPosition = "e2".parse()?;
//! let e4: ChessPosition = "e4".parse()?;
//! m.perform_move(e2, e4)?;
//!
//! assert_eq!(m.current_player(), Color::Black);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Show move hints for a piece:
//!
//! ```
//! # use chessmatch::{ChessPosition, Match};
//! let m = Match::new();
//!
//! let hints = m.possible_moves("b1".parse::<ChessPosition>()?)?;
//! assert_eq!(hints.count(), 2);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect the end of the game:
//!
//! ```
//! # use chessmatch::{ChessPosition, Match};
//! let mut m = Match::new();
//!
//! // fool's mate
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     m.perform_move(from.parse::<ChessPosition>()?, to.parse::<ChessPosition>()?)?;
//! }
//!
//! assert!(m.is_check());
//! assert!(m.is_check_mate());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Pawns reaching the last row become queens. The promoted piece can be
//! exchanged with [`Match::replace_promoted_piece()`] until the next move.
//!
//! # Logging
//!
//! Played moves are logged at `trace` level, rejected moves and promotions
//! at `debug` level and checkmate at `info` level, using
//! [`tracing`](https://docs.rs/tracing/0.1/tracing/).
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod chess_match;
mod chess_position;
mod color;
mod errors;
mod m;
mod matrix;
mod perft;
mod piece;
mod position;
mod role;

pub mod attacks;
pub mod board;

pub use board::Board;
pub use castling_side::{Castles, CastlingSide};
pub use chess_match::{CapturedPieces, Match};
pub use chess_position::{ChessPosition, ParseChessPositionError};
pub use color::{Color, ParseColorError};
pub use errors::{IllegalMove, PlayError, PromotionError};
pub use m::{Move, MoveList};
pub use matrix::MoveMatrix;
pub use perft::{debug_perft, perft};
pub use piece::{Piece, PieceId};
pub use position::{OutOfBounds, Position, BOARD_SIZE};
pub use role::Role;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Position {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}
