//! FEN-style piece placement for pawn-only boards.
//!
//! Ranks are listed from the highest down to rank 1 and separated by `/`.
//! `P` is a white pawn, `p` a black pawn and a digit is a run of empty cells.
//! An optional trailing ` w` / ` b` names the side to move.

use super::{Board, Cell, Color, Square};
use crate::config::BoardConfig;

pub const STARTPOS: &str = "startpos";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub to_move: Color,
}

impl Setup {
    pub fn startpos(cfg: &BoardConfig) -> Self { Self { board: Board::startpos(cfg), to_move: Color::White } }

    pub fn parse(text: &str, cfg: &BoardConfig) -> Result<Self, LayoutError> {
        let mut fields = text.split_whitespace();
        let placement = fields.next().ok_or(LayoutError::Empty)?;
        let to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(LayoutError::SideToMove(other.to_string())),
        };
        if let Some(extra) = fields.next() { return Err(LayoutError::Trailing(extra.to_string())); }
        if placement == STARTPOS {
            return Ok(Self { board: Board::startpos(cfg), to_move });
        }
        Ok(Self { board: parse_placement(placement, cfg.size)?, to_move })
    }
}

pub fn parse_placement(placement: &str, size: usize) -> Result<Board, LayoutError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != size { return Err(LayoutError::RankCount { expected: size, found: rows.len() }); }
    let mut board = Board::empty(size);
    for (i, row) in rows.iter().enumerate() {
        let rank = size - 1 - i;
        let mut file = 0usize;
        for c in row.chars() {
            match c {
                'P' | 'p' => {
                    if file >= size { return Err(LayoutError::RankWidth { rank: rank + 1 }); }
                    let color = if c == 'P' { Color::White } else { Color::Black };
                    board.set(Square::new(file, rank), Cell::Pawn(color));
                    file += 1;
                }
                '1'..='9' => file += (c as u8 - b'0') as usize,
                other => return Err(LayoutError::Piece(other)),
            }
        }
        if file != size { return Err(LayoutError::RankWidth { rank: rank + 1 }); }
    }
    Ok(board)
}

pub fn format_placement(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    for rank in (0..size).rev() {
        let mut empty = 0;
        for file in 0..size {
            match board.get(Square::new(file, rank)) {
                Cell::Empty => empty += 1,
                Cell::Pawn(color) => {
                    if empty > 0 { out.push_str(&empty.to_string()); empty = 0; }
                    out.push(if color == Color::White { 'P' } else { 'p' });
                }
            }
        }
        if empty > 0 { out.push_str(&empty.to_string()); }
        if rank > 0 { out.push('/'); }
    }
    out
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("empty layout")]
    Empty,
    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },
    #[error("rank {rank} does not describe exactly one row")]
    RankWidth { rank: usize },
    #[error("unexpected piece character '{0}'")]
    Piece(char),
    #[error("side to move must be 'w' or 'b', got '{0}'")]
    SideToMove(String),
    #[error("unexpected trailing field '{0}'")]
    Trailing(String),
}
