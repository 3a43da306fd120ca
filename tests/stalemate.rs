use pawnchess::board::layout::Setup;
use pawnchess::board::{Board, Color};
use pawnchess::config::{BoardConfig, GameConfig};
use pawnchess::game::{Game, GameResult, Status, Turn};
use pawnchess::rules::{Outcome, Rules};

fn board(layout: &str) -> Board { Setup::parse(layout, &BoardConfig::default()).expect("valid layout").board }

#[test]
fn blocked_lone_pawn_is_stalemated() {
    let rules = Rules::default();
    let b = board("8/8/8/4p3/4P3/8/8/8 w");
    assert!(rules.is_stalemated(&b, Color::White));
    assert!(rules.is_stalemated(&b, Color::Black));
}

#[test]
fn diagonal_target_breaks_stalemate() {
    let rules = Rules::default();
    let b = board("8/8/8/3pp3/4P3/8/8/8 w");
    assert!(!rules.is_stalemated(&b, Color::White));
    assert!(!rules.is_stalemated(&b, Color::Black));
}

#[test]
fn startpos_is_not_stalemate() {
    let rules = Rules::default();
    let b = Board::startpos(&BoardConfig::default());
    assert!(!rules.is_stalemated(&b, Color::White));
    assert!(!rules.is_stalemated(&b, Color::Black));
}

#[test]
fn game_ends_in_draw_when_side_to_move_is_stuck() {
    let cfg = GameConfig::default();
    let setup = Setup::parse("8/8/8/4p3/4P3/8/8/8 w", &cfg.board).expect("valid layout");
    let mut game = Game::from_setup(&cfg, setup, "W", "B");
    assert_eq!(game.check_stalemate(), Some(GameResult::Draw));
    assert_eq!(game.status(), Status::Finished(GameResult::Draw));
    assert!(game.submit("e4e5").is_err());
}

// Only move for white is e5d6 en passant.
const EN_PASSANT_ONLY: &str = "8/3p4/4p3/4P3/8/8/8/8 b";

#[test]
fn stalemate_ignores_en_passant_by_default() {
    let cfg = GameConfig::default();
    let setup = Setup::parse(EN_PASSANT_ONLY, &cfg.board).expect("valid layout");
    let mut game = Game::from_setup(&cfg, setup, "W", "B");
    assert_eq!(game.check_stalemate(), None);
    game.play_moves(&["d7d5"]).expect("legal");
    assert!(game.rules().is_stalemated(game.board(), Color::White));
    assert!(game.rules().has_legal_move(game.board(), Color::White, game.last_move()));
    assert_eq!(game.check_stalemate(), Some(GameResult::Draw));
}

#[test]
fn stalemate_can_count_en_passant() {
    let cfg = GameConfig { stalemate_counts_en_passant: true, ..GameConfig::default() };
    let setup = Setup::parse(EN_PASSANT_ONLY, &cfg.board).expect("valid layout");
    let mut game = Game::from_setup(&cfg, setup, "W", "B");
    game.play_moves(&["d7d5"]).expect("legal");
    assert_eq!(game.check_stalemate(), None);
    match game.submit("e5d6").expect("game running") {
        Turn::Moved { outcome: Outcome::EnPassant { .. }, result: None } => {}
        other => panic!("expected en passant, got {other:?}"),
    }
    assert_eq!(game.to_move(), Color::Black);
    assert_eq!(game.check_stalemate(), None);
}

#[test]
fn legal_move_check_sees_en_passant() {
    let rules = Rules::default();
    let setup = Setup::parse(EN_PASSANT_ONLY, &BoardConfig::default()).expect("valid layout");
    let mut b = setup.board;
    let double = "d7d5".parse().expect("valid command");
    pawnchess::rules::apply_move(&mut b, double);
    assert!(rules.is_stalemated(&b, Color::White));
    assert!(rules.has_legal_move(&b, Color::White, Some(double)));
    assert!(!rules.has_legal_move(&b, Color::White, None));
}
