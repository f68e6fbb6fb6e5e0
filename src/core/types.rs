use serde::{Deserialize, Serialize};

/// Number of entries in the fixed color palette
pub const PALETTE_SIZE: usize = 5;

/// A palette entry. The ordinal of each variant is part of the grid file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Red = 1,
    Blue = 2,
    Green = 3,
    /// Forbidden cells; never part of a pair
    Black = 4,
}

impl Color {
    /// All palette entries in index order
    pub const PALETTE: [Color; PALETTE_SIZE] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Black,
    ];

    /// Look up a palette entry by its file-format index
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::PALETTE.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Single-character symbol used by the text dump
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::White => 'w',
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Black => 'k',
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A coordinate into a grid: `row` in `0..rows`, `col` in `0..cols`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Two adjacent cells proposed as a matchable unit
///
/// Enumeration always puts the row-major-earlier cell first; pairs built by
/// hand may use either orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: Cell,
    pub second: Cell,
}

impl Pair {
    #[must_use]
    pub fn new(first: impl Into<Cell>, second: impl Into<Cell>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The same pair with its endpoints swapped
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Orientation with the row-major-earlier cell first
    #[must_use]
    pub fn canonical(self) -> Self {
        if self.second < self.first {
            self.reversed()
        } else {
            self
        }
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.first == cell || self.second == cell
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        for (i, color) in Color::PALETTE.iter().enumerate() {
            assert_eq!(usize::from(color.index()), i);
            assert_eq!(Color::from_index(color.index()), Some(*color));
        }
        assert_eq!(Color::from_index(5), None);
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn test_symbols() {
        let symbols: String = Color::PALETTE.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, "wrbgk");
    }

    #[test]
    fn test_pair_canonical() {
        let pair = Pair::new((1, 0), (0, 0));
        assert_eq!(pair.canonical(), Pair::new((0, 0), (1, 0)));
        assert_eq!(pair.canonical().canonical(), pair.canonical());
        assert!(pair.contains(Cell::new(1, 0)));
        assert!(!pair.contains(Cell::new(1, 1)));
    }
}
