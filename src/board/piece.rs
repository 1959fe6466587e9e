//! Piece colors and per-color piece sets.

use serde::Serialize;

use super::position::{Position, ALL_POSITIONS};

/// The color of a piece, and of the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the other side.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the single-character abbreviation used in notation.
    pub const fn abbr(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Parses a color from its single-character abbreviation.
    pub fn from_abbr(c: char) -> Option<Color> {
        match c {
            'W' | 'w' => Some(Color::White),
            'B' | 'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of board positions stored as a 24-bit mask.
///
/// Iteration always yields positions in index order, which keeps move
/// generation reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceSet(u32);

impl PieceSet {
    /// Returns an empty set.
    pub const fn new() -> Self {
        PieceSet(0)
    }

    /// Adds a position. Returns false if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let bit = 1u32 << pos.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Removes a position. Returns false if it was not present.
    pub fn remove(&mut self, pos: Position) -> bool {
        let bit = 1u32 << pos.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.0 & (1u32 << pos.index()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the positions in index order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        ALL_POSITIONS
            .iter()
            .copied()
            .filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Position> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PieceSet::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}
