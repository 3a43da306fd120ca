pub mod layout;
pub mod render;

use std::fmt;

use crate::config::BoardConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Rank step of a forward move.
    pub fn forward(self) -> isize {
        match self { Color::White => 1, Color::Black => -1 }
    }

    pub fn opponent(self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Color::White => "white", Color::Black => "black" })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Color),
}

impl Cell {
    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: usize,
    pub rank: usize,
}

impl Square {
    pub const fn new(file: usize, rank: usize) -> Self { Self { file, rank } }

    /// Parses a letter-digit coordinate such as `e4` on a board of `size` files and ranks.
    pub fn parse(text: &str, size: usize) -> Option<Square> {
        let mut chars = text.chars();
        let (f, r) = (chars.next()?, chars.next()?);
        if chars.next().is_some() { return None; }
        Self::from_chars(f, r, size)
    }

    pub(crate) fn from_chars(f: char, r: char, size: usize) -> Option<Square> {
        if !f.is_ascii_lowercase() || !r.is_ascii_digit() { return None; }
        let file = (f as u8 - b'a') as usize;
        let rank = (r as u8 - b'0') as usize;
        if file >= size || rank == 0 || rank > size { return None; }
        Some(Square { file, rank: rank - 1 })
    }

    /// Square reached by stepping `df` files and `dr` ranks, if it stays on the board.
    pub fn offset(self, df: isize, dr: isize, size: usize) -> Option<Square> {
        let file = self.file as isize + df;
        let rank = self.rank as isize + dr;
        if file < 0 || rank < 0 || file >= size as isize || rank >= size as isize { return None; }
        Some(Square { file: file as usize, rank: rank as usize })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
    }
}

/// Square grid of cells, rank-major with rank 0 at White's side.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(size: usize) -> Self { Self { size, cells: vec![Cell::Empty; size * size] } }

    /// Initial position: the White initial rank full of white pawns, the Black one full of black pawns.
    pub fn startpos(cfg: &BoardConfig) -> Self {
        let mut board = Self::empty(cfg.size);
        for file in 0..cfg.size {
            for color in Color::BOTH {
                board.set(Square::new(file, cfg.initial_rank(color)), Cell::Pawn(color));
            }
        }
        board
    }

    pub fn size(&self) -> usize { self.size }

    pub fn contains(&self, sq: Square) -> bool { sq.file < self.size && sq.rank < self.size }

    pub fn get(&self, sq: Square) -> Cell {
        if self.contains(sq) { self.cells[sq.rank * self.size + sq.file] } else { Cell::Empty }
    }

    pub fn set(&mut self, sq: Square, cell: Cell) {
        if self.contains(sq) { self.cells[sq.rank * self.size + sq.file] = cell; }
    }

    /// Every occupied square holding a pawn of `color`, rank by rank from rank 0.
    pub fn pawns(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        let size = self.size;
        self.cells.iter().enumerate()
            .filter(move |(_, c)| **c == Cell::Pawn(color))
            .map(move |(i, _)| Square::new(i % size, i / size))
    }
}
