use pawnchess::board::layout::Setup;
use pawnchess::board::{Board, Color};
use pawnchess::config::BoardConfig;
use pawnchess::perft::{divide, perft};
use pawnchess::rules::{Outcome, Rules};

fn setup(layout: &str) -> Setup { Setup::parse(layout, &BoardConfig::default()).expect("valid layout") }

#[test]
fn perft_startpos_small_depths() {
    let rules = Rules::default();
    let b = Board::startpos(&BoardConfig::default());
    assert_eq!(perft(&rules, &b, Color::White, None, 0), 1);
    assert_eq!(perft(&rules, &b, Color::White, None, 1), 16);
    assert_eq!(perft(&rules, &b, Color::White, None, 2), 256);
}

#[test]
fn perft_lone_pawns() {
    let rules = Rules::default();
    let s = setup("8/p7/8/8/8/8/4P3/8 w");
    assert_eq!(perft(&rules, &s.board, s.to_move, None, 1), 2);
    assert_eq!(perft(&rules, &s.board, s.to_move, None, 2), 4);
}

#[test]
fn perft_counts_en_passant_replies() {
    let rules = Rules::default();
    let s = setup("8/8/8/8/4p3/8/3P4/8 w");
    let split = divide(&rules, &s.board, s.to_move, None, 2);
    let d3: pawnchess::rules::Move = "d2d3".parse().expect("valid");
    let d4: pawnchess::rules::Move = "d2d4".parse().expect("valid");
    assert_eq!(split, vec![(d3, 2), (d4, 2)]);
    assert_eq!(perft(&rules, &s.board, s.to_move, None, 2), 4);
}

#[test]
fn winning_moves_are_leaves() {
    let rules = Rules::default();
    // a7a8 wins, b5b6 does not
    let s = setup("8/P7/8/1P6/8/8/6p1/8 w");
    let split = divide(&rules, &s.board, s.to_move, None, 3);
    let a8 = split.iter().find(|(m, _)| m.to_string() == "a7a8").expect("a7a8 generated");
    assert_eq!(a8.1, 1);
    assert_eq!(split.len(), 2);
}

#[test]
fn generated_moves_resolve_identically() {
    let rules = Rules::default();
    let positions = ["startpos", "8/8/8/3pp3/4P3/8/8/8 w", "8/3p4/4p3/4P3/8/8/8/8 b", "8/p7/8/8/4p3/8/3P3P/8 w"];
    for layout in positions {
        let s = setup(layout);
        for color in Color::BOTH {
            for outcome in rules.legal_moves(&s.board, color, None) {
                let mv = outcome.accepted().expect("only accepted outcomes");
                assert_eq!(rules.resolve_move(&s.board, color, &mv.to_string(), None), outcome, "{layout} {mv}");
                assert!(!matches!(outcome, Outcome::Rejected(_)));
            }
        }
    }
}
