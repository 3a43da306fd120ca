// Pawn-only chess: rules engine, game orchestration and a line-oriented console
pub mod board;
pub mod config;
pub mod console;
pub mod game;
pub mod perft;
pub mod rules;
