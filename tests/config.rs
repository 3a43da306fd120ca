use pawnchess::board::{Board, Color};
use pawnchess::config::{BoardConfig, ConfigError, GameConfig};
use pawnchess::game::Game;
use pawnchess::perft::perft;
use pawnchess::rules::Rules;

#[test]
fn defaults_describe_standard_board() {
    let cfg = GameConfig::default();
    cfg.validate().expect("default config is valid");
    assert_eq!(cfg.board.size, 8);
    assert_eq!(cfg.board.initial_rank(Color::White), 1);
    assert_eq!(cfg.board.initial_rank(Color::Black), 6);
    assert_eq!(cfg.board.final_rank(Color::White), 7);
    assert_eq!(cfg.board.final_rank(Color::Black), 0);
    assert_eq!(cfg.ui.quit_token, "quit");
    assert!(!cfg.stalemate_counts_en_passant);
}

#[test]
fn json_fields_are_optional() {
    let cfg = GameConfig::from_json(r#"{"board": {"size": 6, "black_initial_rank": 4}, "ui": {"quit_token": "q"}}"#)
        .expect("valid config");
    assert_eq!(cfg.board, BoardConfig { size: 6, white_initial_rank: 1, black_initial_rank: 4 });
    assert_eq!(cfg.ui.quit_token, "q");
    assert_eq!(cfg.ui.white_symbol, 'W');
    let empty = GameConfig::from_json("{}").expect("empty object");
    assert_eq!(empty, GameConfig::default());
}

#[test]
fn serialized_default_reloads() {
    let text = serde_json::to_string(&GameConfig::default()).expect("serialize");
    assert_eq!(GameConfig::from_json(&text).expect("reload"), GameConfig::default());
}

#[test]
fn rejects_bad_geometry_and_labels() {
    assert!(matches!(GameConfig::from_json(r#"{"board": {"size": 10}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::from_json(r#"{"board": {"size": 6}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::from_json(r#"{"board": {"white_initial_rank": 6}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::from_json(r#"{"ui": {"black_symbol": "W"}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::from_json("{\"board\": "), Err(ConfigError::Parse(_))));
    assert!(matches!(GameConfig::from_json(r#"{"ui": {"quit_token": "quit "}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::from_json(r#"{"ui": {"quit_token": " "}}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(GameConfig::load("does/not/exist.json"), Err(ConfigError::Io(_))));
}

#[test]
fn small_board_plays_by_the_same_rules() {
    let cfg = GameConfig::from_json(r#"{"board": {"size": 5, "black_initial_rank": 3}}"#).expect("valid config");
    let rules = Rules::new(cfg.board);
    let b = Board::startpos(&cfg.board);
    // doubles are blocked by the black pawns on rank 4
    assert_eq!(perft(&rules, &b, Color::White, None, 1), 5);

    let mut game = Game::new(&cfg, "W", "B");
    game.play_moves(&["a2a3", "b4a3"]).expect("legal on 5x5");
    assert_eq!(game.to_move(), Color::White);
}
