use log::{debug, info};
use std::fmt;

use crate::board::layout::Setup;
use crate::board::{Board, Color};
use crate::config::GameConfig;
use crate::rules::{apply_outcome, count_pawns, Move, Outcome, Rejection, Rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// A pawn reached the far rank.
    Promotion,
    /// The opponent has no pawns left.
    Elimination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Color, reason: WinReason },
    Draw,
    Quit,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, reason: WinReason::Promotion } => write!(f, "{winner} reached the last rank"),
            GameResult::Win { winner, reason: WinReason::Elimination } => write!(f, "{winner} took every opposing pawn"),
            GameResult::Draw => f.write_str("stalemate"),
            GameResult::Quit => f.write_str("quit"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    AwaitingMove,
    Finished(GameResult),
}

/// What happened to one submitted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Rejected(Rejection),
    Moved { outcome: Outcome, result: Option<GameResult> },
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game is over: {0}")]
    GameOver(GameResult),
    #[error("move {ply} '{command}' rejected: {reason}")]
    Rejected { ply: usize, command: String, reason: Rejection },
}

/// Win check after `mover` played `mv` on `board`: far rank first, then elimination.
pub fn win_reason(rules: &Rules, board: &Board, mover: Color, mv: Move) -> Option<WinReason> {
    if mv.to.rank == rules.config().final_rank(mover) {
        Some(WinReason::Promotion)
    } else if count_pawns(board, mover.opponent()) == 0 {
        Some(WinReason::Elimination)
    } else {
        None
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    rules: Rules,
    board: Board,
    to_move: Color,
    last_move: Option<Move>,
    names: [String; 2],
    status: Status,
    plies: usize,
    quit_token: String,
    stalemate_counts_en_passant: bool,
}

impl Game {
    pub fn new(cfg: &GameConfig, white: impl Into<String>, black: impl Into<String>) -> Self {
        Self::from_setup(cfg, Setup::startpos(&cfg.board), white, black)
    }

    pub fn from_setup(cfg: &GameConfig, setup: Setup, white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            rules: Rules::new(cfg.board),
            board: setup.board,
            to_move: setup.to_move,
            last_move: None,
            names: [white.into(), black.into()],
            status: Status::AwaitingMove,
            plies: 0,
            quit_token: cfg.ui.quit_token.clone(),
            stalemate_counts_en_passant: cfg.stalemate_counts_en_passant,
        }
    }

    pub fn rules(&self) -> &Rules { &self.rules }
    pub fn board(&self) -> &Board { &self.board }
    pub fn to_move(&self) -> Color { self.to_move }
    pub fn last_move(&self) -> Option<Move> { self.last_move }
    pub fn status(&self) -> Status { self.status }
    pub fn plies(&self) -> usize { self.plies }

    pub fn name(&self, color: Color) -> &str {
        match color { Color::White => &self.names[0], Color::Black => &self.names[1] }
    }

    pub fn current_name(&self) -> &str { self.name(self.to_move) }

    /// Ends the game in a draw when the side to move cannot advance or capture.
    /// Call before asking the side to move for a command.
    pub fn check_stalemate(&mut self) -> Option<GameResult> {
        if let Status::Finished(result) = self.status { return Some(result); }
        let stuck = if self.stalemate_counts_en_passant {
            !self.rules.has_legal_move(&self.board, self.to_move, self.last_move)
        } else {
            self.rules.is_stalemated(&self.board, self.to_move)
        };
        if !stuck { return None; }
        info!("{} to move is stalemated after {} plies", self.to_move, self.plies);
        self.status = Status::Finished(GameResult::Draw);
        Some(GameResult::Draw)
    }

    pub fn quit(&mut self) -> GameResult {
        if let Status::Finished(result) = self.status { return result; }
        info!("{} quit after {} plies", self.to_move, self.plies);
        self.status = Status::Finished(GameResult::Quit);
        GameResult::Quit
    }

    /// Plays one command for the side to move. Rejected commands leave the game untouched.
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GameError> {
        if let Status::Finished(result) = self.status { return Err(GameError::GameOver(result)); }
        let raw = raw.trim();
        if raw == self.quit_token {
            self.quit();
            return Ok(Turn::Quit);
        }
        let mover = self.to_move;
        let outcome = self.rules.resolve_move(&self.board, mover, raw, self.last_move);
        let mv = match &outcome {
            Outcome::Rejected(reason) => {
                debug!("{} command '{}' rejected: {:?}", mover, raw, reason);
                return Ok(Turn::Rejected(reason.clone()));
            }
            Outcome::Advance(mv) | Outcome::Capture(mv) | Outcome::EnPassant { mv, .. } => *mv,
        };
        apply_outcome(&mut self.board, &outcome);
        debug!("{} plays {:?}", mover, outcome);
        self.last_move = Some(mv);
        self.plies += 1;
        let result = win_reason(&self.rules, &self.board, mover, mv)
            .map(|reason| GameResult::Win { winner: mover, reason });
        match result {
            Some(r) => {
                info!("game over after {} plies: {}", self.plies, r);
                self.status = Status::Finished(r);
            }
            None => self.to_move = mover.opponent(),
        }
        Ok(Turn::Moved { outcome, result })
    }

    /// Plays a whole sequence, stopping at the first rejected command.
    pub fn play_moves<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<(), GameError> {
        for m in moves {
            if let Turn::Rejected(reason) = self.submit(m.as_ref())? {
                return Err(GameError::Rejected { ply: self.plies + 1, command: m.as_ref().to_string(), reason });
            }
        }
        Ok(())
    }
}
