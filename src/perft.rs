// Move-count driver over the rules engine, cloning the board per child
use crate::board::{Board, Color};
use crate::game::win_reason;
use crate::rules::{apply_outcome, Move, Outcome, Rules};

/// Number of legal move sequences of length `depth`. A move that wins the game is a leaf.
pub fn perft(rules: &Rules, board: &Board, color: Color, last: Option<Move>, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for outcome in rules.legal_moves(board, color, last) {
        if depth == 1 { nodes += 1; continue; }
        nodes += subtree(rules, board, color, &outcome, depth).map_or(0, |(_, n)| n);
    }
    nodes
}

/// Count below one root outcome of a `depth`-ply perft. `None` for rejected outcomes.
pub fn subtree(rules: &Rules, board: &Board, color: Color, outcome: &Outcome, depth: u32) -> Option<(Move, u64)> {
    let mut child = board.clone();
    let mv = apply_outcome(&mut child, outcome)?;
    let n = if depth <= 1 || win_reason(rules, &child, color, mv).is_some() {
        1
    } else {
        perft(rules, &child, color.opponent(), Some(mv), depth - 1)
    };
    Some((mv, n))
}

/// Per-root-move breakdown of [`perft`].
pub fn divide(rules: &Rules, board: &Board, color: Color, last: Option<Move>, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    rules.legal_moves(board, color, last).iter()
        .filter_map(|outcome| subtree(rules, board, color, outcome, depth))
        .collect()
}
