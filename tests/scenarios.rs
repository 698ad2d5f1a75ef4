use chessmatch::{
    Castles, ChessPosition, Color, IllegalMove, Match, OutOfBounds, PlayError, Position,
    PromotionError, Role,
};

fn sq(s: &str) -> ChessPosition {
    s.parse().expect("valid square")
}

fn play(m: &mut Match, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        if let Err(err) = m.perform_move(sq(from), sq(to)) {
            panic!("{from}{to} rejected: {err}");
        }
    }
}

fn piece_char(m: &Match, square: &str) -> Option<char> {
    m.board().piece(sq(square).into()).map(|p| p.char())
}

#[test]
fn test_opening_move() {
    let mut m = Match::new();
    let captured = m.perform_move(sq("e2"), sq("e4")).expect("legal move");

    assert_eq!(captured, None);
    assert_eq!(m.turn(), 2);
    assert_eq!(m.current_player(), Color::Black);
    assert!(!m.is_check());
    assert!(!m.is_check_mate());
    assert_eq!(piece_char(&m, "e2"), None);
    assert_eq!(piece_char(&m, "e4"), Some('P'));

    let pawn = m.en_passant_vulnerable().expect("pawn advanced two squares");
    assert_eq!(pawn.position, sq("e4").into());
    assert_eq!(pawn.move_count, 1);
}

#[test]
fn test_wrong_player() {
    let mut m = Match::new();
    let before = m.clone();
    assert_eq!(
        m.perform_move(sq("e7"), sq("e5")),
        Err(PlayError::IllegalMove(IllegalMove::NotYourPiece))
    );
    assert_eq!(
        m.perform_move(sq("e3"), sq("e4")),
        Err(PlayError::IllegalMove(IllegalMove::NoPiece))
    );
    assert_eq!(m, before);
}

#[test]
fn test_coordinates() {
    assert_eq!(Position::new(8, 0), Err(OutOfBounds));
    assert_eq!(Position::new(0, 8), Err(OutOfBounds));
    assert!("i1".parse::<ChessPosition>().is_err());
    assert!("a9".parse::<ChessPosition>().is_err());

    let e2 = Position::from(sq("e2"));
    assert_eq!((e2.row(), e2.column()), (6, 4));
    assert_eq!(ChessPosition::from(e2), sq("e2"));
}

#[test]
fn test_fools_mate() {
    let mut m = Match::new();
    play(&mut m, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);

    assert!(m.is_check());
    assert!(m.is_check_mate());
    assert_eq!(m.turn(), 4);
    assert_eq!(m.current_player(), Color::Black);
}

#[test]
fn test_check_and_self_check() {
    let mut m = Match::new();
    play(&mut m, &[("e2", "e4"), ("e7", "e5"), ("d2", "d4"), ("f8", "b4")]);
    assert!(m.is_check());
    assert!(!m.is_check_mate());

    // ignoring the check
    let before = m.clone();
    assert_eq!(m.perform_move(sq("a2"), sq("a3")), Err(PlayError::SelfCheck));
    assert_eq!(m, before);

    play(&mut m, &[("c2", "c3")]);
    assert!(!m.is_check());
    play(&mut m, &[("g8", "f6")]);

    // the blocking pawn is pinned now
    let before = m.clone();
    assert_eq!(m.perform_move(sq("c3"), sq("c4")), Err(PlayError::SelfCheck));
    assert_eq!(m, before);
    let captured = m.perform_move(sq("c3"), sq("b4")).expect("capturing the pinner");
    assert_eq!(captured.map(|p| p.role), Some(Role::Bishop));
}

#[test]
fn test_played_moves_match_legal_moves() {
    let mut m = Match::new();
    play(&mut m, &[("e2", "e4"), ("e7", "e5"), ("d2", "d4"), ("f8", "b4")]);
    let legals = m.legal_moves();

    for from in Position::all() {
        let Ok(targets) = m.possible_moves(from) else {
            continue;
        };
        for to in targets.iter() {
            let mut child = m.clone();
            let played = child.perform_move(from, to);
            assert_eq!(
                played.is_ok(),
                legals.iter().any(|mv| mv.from == from && mv.to == to),
                "{from}{to}"
            );
            if played.is_err() {
                assert_eq!(child, m);
            }
        }
    }
}

#[test]
fn test_castling_king_side() {
    let mut m = Match::new();
    play(
        &mut m,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
        ],
    );

    let hints = m.possible_moves(sq("e1")).expect("king can move");
    assert!(hints.get(sq("g1").into()));

    play(&mut m, &[("e1", "g1")]);
    let king = m.board().piece(sq("g1").into()).expect("king on g1");
    let rook = m.board().piece(sq("f1").into()).expect("rook on f1");
    assert_eq!((king.role, king.move_count), (Role::King, 1));
    assert_eq!((rook.role, rook.move_count), (Role::Rook, 1));
    assert_eq!(piece_char(&m, "h1"), None);
    assert_eq!(m.castling_rights(), Castles::BLACK);
}

#[test]
fn test_castling_queen_side() {
    let mut m = Match::new();
    play(
        &mut m,
        &[
            ("d2", "d4"),
            ("d7", "d5"),
            ("b1", "c3"),
            ("b8", "c6"),
            ("c1", "f4"),
            ("c8", "f5"),
            ("d1", "d2"),
            ("d8", "d7"),
            ("e1", "c1"),
            ("e8", "c8"),
        ],
    );

    assert_eq!(piece_char(&m, "c1"), Some('K'));
    assert_eq!(piece_char(&m, "d1"), Some('R'));
    assert_eq!(piece_char(&m, "a1"), None);
    assert_eq!(piece_char(&m, "c8"), Some('k'));
    assert_eq!(piece_char(&m, "d8"), Some('r'));
    assert_eq!(piece_char(&m, "a8"), None);
    assert!(m.castling_rights().is_empty());
}

#[test]
fn test_no_castling_through_attacked_square() {
    let mut m = Match::new();
    play(
        &mut m,
        &[
            ("e2", "e4"),
            ("b7", "b6"),
            ("g1", "f3"),
            ("c8", "a6"),
            ("g2", "g3"),
            ("h7", "h6"),
            ("f1", "g2"),
            ("h6", "h5"),
        ],
    );

    // f1 is covered by the bishop on a6
    assert!(m.castling_rights().has(Color::White, chessmatch::CastlingSide::KingSide));
    let hints = m.possible_moves(sq("e1")).expect("king can move");
    assert!(!hints.get(sq("g1").into()));
    assert_eq!(
        m.perform_move(sq("e1"), sq("g1")),
        Err(PlayError::IllegalMove(IllegalMove::InvalidTarget))
    );
}

#[test]
fn test_en_passant() {
    let mut m = Match::new();
    play(&mut m, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);

    let hints = m.possible_moves(sq("e5")).expect("pawn can move");
    assert!(hints.get(sq("d6").into()));

    let captured = m.perform_move(sq("e5"), sq("d6")).expect("en passant");
    let pawn = captured.expect("captured pawn");
    assert_eq!((pawn.color, pawn.role), (Color::Black, Role::Pawn));
    assert_eq!(pawn.position, sq("d5").into());
    assert_eq!(piece_char(&m, "d5"), None);
    assert_eq!(piece_char(&m, "d6"), Some('P'));
    assert_eq!(m.captured_pieces(), [pawn]);
}

#[test]
fn test_en_passant_black() {
    let mut m = Match::new();
    play(&mut m, &[("a2", "a3"), ("d7", "d5"), ("a3", "a4"), ("d5", "d4"), ("e2", "e4")]);

    let captured = m.perform_move(sq("d4"), sq("e3")).expect("en passant");
    let pawn = captured.expect("captured pawn");
    assert_eq!((pawn.color, pawn.role), (Color::White, Role::Pawn));
    assert_eq!(pawn.position, sq("e4").into());
    assert_eq!(piece_char(&m, "e4"), None);
    assert_eq!(piece_char(&m, "e3"), Some('p'));
    assert_eq!(m.captured_by_color(Color::White).count(), 1);
    assert_eq!(m.current_player(), Color::White);
}

#[test]
fn test_en_passant_expires() {
    let mut m = Match::new();
    play(
        &mut m,
        &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("h2", "h3"),
            ("a6", "a5"),
        ],
    );

    assert_eq!(m.en_passant_vulnerable(), None);
    assert_eq!(
        m.perform_move(sq("e5"), sq("d6")),
        Err(PlayError::IllegalMove(IllegalMove::InvalidTarget))
    );
}

#[test]
fn test_promotion() {
    let mut m = Match::new();
    play(
        &mut m,
        &[
            ("b2", "b4"),
            ("a7", "a5"),
            ("b4", "a5"),
            ("h7", "h6"),
            ("a5", "a6"),
            ("h6", "h5"),
            ("a6", "a7"),
            ("h5", "h4"),
        ],
    );
    assert_eq!(
        m.replace_promoted_piece(Role::Queen),
        Err(PromotionError::NoPendingPromotion)
    );

    let captured = m.perform_move(sq("a7"), sq("b8")).expect("capturing promotion");
    assert_eq!(captured.map(|p| p.role), Some(Role::Knight));
    assert_eq!(piece_char(&m, "b8"), Some('Q'));
    let queen = m.promoted().expect("pending promotion");
    assert_eq!(queen.role, Role::Queen);

    assert_eq!(
        m.replace_promoted_piece(Role::Pawn),
        Err(PromotionError::InvalidPromotionType(Role::Pawn))
    );
    let knight = m.replace_promoted_piece(Role::Knight).expect("pending promotion");
    assert_eq!(knight.position, sq("b8").into());
    assert_eq!(piece_char(&m, "b8"), Some('N'));
    assert_eq!(m.current_player(), Color::Black);

    play(&mut m, &[("a8", "b8")]);
    assert_eq!(m.promoted(), None);
    assert_eq!(m.captured_by_color(Color::White).count(), 1);
    assert_eq!(m.captured_by_color(Color::Black).count(), 2);
}

#[test]
fn test_board_display() {
    let m = Match::new();
    let rendered = m.board().to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("8 r n b q k b n r "));
    assert_eq!(lines.next(), Some("7 p p p p p p p p "));
    assert_eq!(lines.next(), Some("6 - - - - - - - - "));
    assert_eq!(lines.last(), Some("  a b c d e f g h"));
}
