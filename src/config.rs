use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::Color;

/// Board geometry shared by the rules engine and the board itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: usize,
    pub white_initial_rank: usize,
    pub black_initial_rank: usize,
}

impl Default for BoardConfig {
    fn default() -> Self { Self { size: 8, white_initial_rank: 1, black_initial_rank: 6 } }
}

impl BoardConfig {
    pub const MIN_SIZE: usize = 3;
    pub const MAX_SIZE: usize = 9; // ranks must stay single digits

    pub fn initial_rank(&self, color: Color) -> usize {
        match color { Color::White => self.white_initial_rank, Color::Black => self.black_initial_rank }
    }

    /// Rank a pawn of `color` has to reach to win.
    pub fn final_rank(&self, color: Color) -> usize {
        match color { Color::White => self.size - 1, Color::Black => 0 }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < Self::MIN_SIZE || self.size > Self::MAX_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board size {} outside {}..={}", self.size, Self::MIN_SIZE, Self::MAX_SIZE
            )));
        }
        if self.white_initial_rank >= self.black_initial_rank || self.black_initial_rank >= self.size {
            return Err(ConfigError::Invalid(format!(
                "initial ranks must satisfy white ({}) < black ({}) < size ({})",
                self.white_initial_rank, self.black_initial_rank, self.size
            )));
        }
        Ok(())
    }
}

/// Text shown by the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub caption: String,
    pub first_name_prompt: String,
    pub second_name_prompt: String,
    /// `{name}` is replaced by the current player's name.
    pub move_prompt: String,
    pub quit_token: String,
    pub white_symbol: char,
    pub black_symbol: char,
    pub white_label: String,
    pub black_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            caption: "Pawn Chess".to_string(),
            first_name_prompt: "First player (white): ".to_string(),
            second_name_prompt: "Second player (black): ".to_string(),
            move_prompt: "{name}'s move: ".to_string(),
            quit_token: "quit".to_string(),
            white_symbol: 'W',
            black_symbol: 'B',
            white_label: "White".to_string(),
            black_label: "Black".to_string(),
        }
    }
}

impl UiConfig {
    pub fn symbol(&self, color: Color) -> char {
        match color { Color::White => self.white_symbol, Color::Black => self.black_symbol }
    }

    pub fn label(&self, color: Color) -> &str {
        match color { Color::White => &self.white_label, Color::Black => &self.black_label }
    }

    pub fn move_prompt_for(&self, name: &str) -> String { self.move_prompt.replace("{name}", name) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
    /// Count en passant as an available move when testing for stalemate.
    pub stalemate_counts_en_passant: bool,
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.ui.white_symbol == self.ui.black_symbol {
            return Err(ConfigError::Invalid("white and black symbols must differ".to_string()));
        }
        let token = &self.ui.quit_token;
        if token.is_empty() || token.trim() != token {
            return Err(ConfigError::Invalid(format!("quit token '{}' must be non-empty without surrounding whitespace", token)));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
