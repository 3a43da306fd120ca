use std::fmt::Write as _;

use super::{Board, Cell, Square};
use crate::config::UiConfig;

/// Draws the board top rank first, framed by separator lines, with file letters underneath.
pub fn render(board: &Board, ui: &UiConfig) -> String {
    let size = board.size();
    let separator = format!("  +{}", "---+".repeat(size));
    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    for rank in (0..size).rev() {
        let _ = write!(out, "{} |", rank + 1);
        for file in 0..size {
            let symbol = match board.get(Square::new(file, rank)) {
                Cell::Empty => ' ',
                Cell::Pawn(color) => ui.symbol(color),
            };
            let _ = write!(out, " {} |", symbol);
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out.push_str("   ");
    for file in 0..size {
        let _ = write!(out, " {}  ", (b'a' + file as u8) as char);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
