//! Pawn movement rules.
//!
//! Everything here is a pure function of the board, the side to move and the
//! previous move. The board only changes through [`apply_move`],
//! [`apply_en_passant`] and [`apply_outcome`].

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, Color, Square};
use crate::config::BoardConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self { Self { from, to } }

    fn file_delta(&self) -> isize { self.to.file as isize - self.from.file as isize }

    fn rank_delta(&self) -> isize { self.to.rank as isize - self.from.rank as isize }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}{}", self.from, self.to) }
}

/// Parses against the standard 8x8 geometry.
impl FromStr for Move {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Rules::default().parse_command(s) }
}

/// Why a command was not accepted. The display strings are shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid Input")]
    InvalidFormat,
    #[error("No {color} pawn at {square}")]
    NoPawn { color: Color, square: Square },
    #[error("Invalid Input")]
    Illegal(Move),
}

/// Result of resolving a command for the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rejected(Rejection),
    Advance(Move),
    Capture(Move),
    /// `captured` is the square of the pawn removed alongside the move.
    EnPassant { mv: Move, captured: Square },
}

impl Outcome {
    pub fn accepted(&self) -> Option<Move> {
        match self {
            Outcome::Rejected(_) => None,
            Outcome::Advance(mv) | Outcome::Capture(mv) | Outcome::EnPassant { mv, .. } => Some(*mv),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    cfg: BoardConfig,
}

impl Rules {
    pub fn new(cfg: BoardConfig) -> Self { Self { cfg } }

    pub fn config(&self) -> &BoardConfig { &self.cfg }

    /// Accepts exactly `<file><rank><file><rank>` with both squares on the board.
    pub fn parse_command(&self, raw: &str) -> Result<Move, Rejection> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != 4 { return Err(Rejection::InvalidFormat); }
        let from = Square::from_chars(chars[0], chars[1], self.cfg.size).ok_or(Rejection::InvalidFormat)?;
        let to = Square::from_chars(chars[2], chars[3], self.cfg.size).ok_or(Rejection::InvalidFormat)?;
        Ok(Move { from, to })
    }

    pub fn has_pawn_at(&self, board: &Board, color: Color, sq: Square) -> bool {
        board.get(sq) == Cell::Pawn(color)
    }

    pub fn is_legal_advance(&self, board: &Board, color: Color, mv: Move) -> bool {
        if mv.file_delta() != 0 { return false; }
        let steps = mv.rank_delta() * color.forward();
        let allowed = match steps {
            1 => true,
            2 => mv.from.rank == self.cfg.initial_rank(color),
            _ => false,
        };
        if !allowed { return false; }
        (1..=steps).all(|i| {
            mv.from.offset(0, i * color.forward(), board.size())
                .map_or(false, |sq| board.get(sq).is_empty())
        })
    }

    pub fn is_legal_capture(&self, board: &Board, color: Color, mv: Move) -> bool {
        mv.file_delta().abs() == 1
            && mv.rank_delta() == color.forward()
            && board.get(mv.to) == Cell::Pawn(color.opponent())
    }

    pub fn is_legal_en_passant(&self, board: &Board, color: Color, mv: Move, last: Option<Move>) -> bool {
        self.en_passant_capture(board, color, mv, last).is_some()
    }

    /// Square of the pawn `mv` would take en passant, if the capture is legal.
    pub fn en_passant_capture(&self, board: &Board, color: Color, mv: Move, last: Option<Move>) -> Option<Square> {
        let last = last?;
        let opp = color.opponent();
        let opp_initial = self.cfg.initial_rank(opp) as isize;
        let was_double = last.file_delta() == 0
            && last.from.rank as isize == opp_initial
            && last.to.rank as isize == opp_initial + 2 * opp.forward();
        if !was_double || board.get(last.to) != Cell::Pawn(opp) { return None; }
        let passes = mv.file_delta().abs() == 1
            && mv.rank_delta() == color.forward()
            && mv.to.file == last.to.file
            && mv.to.rank as isize == last.to.rank as isize - opp.forward();
        passes.then_some(last.to)
    }

    /// Parses `raw` and resolves it for `color`.
    pub fn resolve_move(&self, board: &Board, color: Color, raw: &str, last: Option<Move>) -> Outcome {
        match self.parse_command(raw) {
            Ok(mv) => self.resolve(board, color, mv, last),
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    /// Ownership first, then advance, capture and en passant in that order.
    pub fn resolve(&self, board: &Board, color: Color, mv: Move, last: Option<Move>) -> Outcome {
        if !self.has_pawn_at(board, color, mv.from) {
            return Outcome::Rejected(Rejection::NoPawn { color, square: mv.from });
        }
        if self.is_legal_advance(board, color, mv) {
            Outcome::Advance(mv)
        } else if self.is_legal_capture(board, color, mv) {
            Outcome::Capture(mv)
        } else if let Some(captured) = self.en_passant_capture(board, color, mv, last) {
            Outcome::EnPassant { mv, captured }
        } else {
            Outcome::Rejected(Rejection::Illegal(mv))
        }
    }

    /// No pawn of `color` can step forward or capture diagonally. En passant is not considered.
    pub fn is_stalemated(&self, board: &Board, color: Color) -> bool {
        let size = board.size();
        let opp = Cell::Pawn(color.opponent());
        !board.pawns(color).any(|sq| {
            let ahead = sq.offset(0, color.forward(), size).map_or(false, |a| board.get(a).is_empty());
            let takes = [-1, 1].iter().any(|&df| {
                sq.offset(df, color.forward(), size).map_or(false, |d| board.get(d) == opp)
            });
            ahead || takes
        })
    }

    /// Every accepted outcome for `color`, pawn by pawn from rank 0.
    pub fn legal_moves(&self, board: &Board, color: Color, last: Option<Move>) -> Vec<Outcome> {
        let size = board.size();
        let fwd = color.forward();
        let mut out = Vec::new();
        for from in board.pawns(color) {
            let targets = [(0, fwd), (0, 2 * fwd), (-1, fwd), (1, fwd)];
            for (df, dr) in targets {
                let Some(to) = from.offset(df, dr, size) else { continue };
                let outcome = self.resolve(board, color, Move::new(from, to), last);
                if outcome.accepted().is_some() { out.push(outcome); }
            }
        }
        out
    }

    /// Like `!is_stalemated` but also counts en passant.
    pub fn has_legal_move(&self, board: &Board, color: Color, last: Option<Move>) -> bool {
        !self.is_stalemated(board, color) || !self.legal_moves(board, color, last).is_empty()
    }
}

/// Moves the piece on `mv.from` to `mv.to`, overwriting whatever stood there.
pub fn apply_move(board: &mut Board, mv: Move) {
    let piece = board.get(mv.from);
    board.set(mv.from, Cell::Empty);
    board.set(mv.to, piece);
}

/// Applies `mv` and removes the passed pawn on `captured`, the landing square of its double advance.
pub fn apply_en_passant(board: &mut Board, mv: Move, captured: Square) {
    apply_move(board, mv);
    board.set(captured, Cell::Empty);
}

/// Applies an accepted outcome; rejected outcomes leave the board alone.
pub fn apply_outcome(board: &mut Board, outcome: &Outcome) -> Option<Move> {
    match *outcome {
        Outcome::Rejected(_) => None,
        Outcome::Advance(mv) | Outcome::Capture(mv) => {
            apply_move(board, mv);
            Some(mv)
        }
        Outcome::EnPassant { mv, captured } => {
            apply_en_passant(board, mv, captured);
            Some(mv)
        }
    }
}

pub fn count_pawns(board: &Board, color: Color) -> usize { board.pawns(color).count() }
