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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use chessmatch::{perft, Match};
//!
//! let m = Match::new();
//! assert_eq!(perft(&m, 1), 20);
//! assert_eq!(perft(&m, 2), 400);
//! assert_eq!(perft(&m, 3), 8902);
//! ```

use crate::chess_match::Match;

/// Counts legal move paths of a given length.
///
/// Paths with checkmate are not counted unless it occurs in the final
/// position. Promotions count once, because pawns are always promoted to a
/// queen when the move is played. Useful for comparing, testing and
/// debugging move generation correctness and performance.
pub fn perft(m: &Match, depth: u8) -> u64 {
    if depth < 1 {
        1
    } else if m.is_check_mate() {
        0
    } else {
        let moves = m.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|mv| {
                    let mut child = m.clone();
                    match child.perform_move(mv.from, mv.to) {
                        Ok(_) => perft(&child, depth - 1),
                        Err(_) => 0,
                    }
                })
                .sum()
        }
    }
}

/// Like [`perft()`], but also prints the perft of each child for debugging.
pub fn debug_perft(m: &Match, depth: u8) -> u64 {
    if depth < 1 {
        1
    } else {
        m.legal_moves()
            .iter()
            .map(|mv| {
                let mut child = m.clone();
                let nodes = match child.perform_move(mv.from, mv.to) {
                    Ok(_) => perft(&child, depth - 1),
                    Err(_) => 0,
                };
                println!("{} {}: {}", mv, depth - 1, nodes);
                nodes
            })
            .sum()
    }
}
