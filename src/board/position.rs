//! Point definitions for the Nine Men's Morris board.
//!
//! All 24 points are enumerated in column-major, row-ascending order
//! (a1, a4, a7, b2, ...). Coordinate pairs that are not points on the board
//! have no `Position` value, so every `Position` is a legal point.

/// The number of points on the board.
pub const POSITION_COUNT: usize = 24;

/// A point on the board, named by column (a..g) and row (1..7).
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Position {
    A1 = 0,
    A4 = 1,
    A7 = 2,
    B2 = 3,
    B4 = 4,
    B6 = 5,
    C3 = 6,
    C4 = 7,
    C5 = 8,
    D1 = 9,
    D2 = 10,
    D3 = 11,
    D5 = 12,
    D6 = 13,
    D7 = 14,
    E3 = 15,
    E4 = 16,
    E5 = 17,
    F2 = 18,
    F4 = 19,
    F6 = 20,
    G1 = 21,
    G4 = 22,
    G7 = 23,
}

/// All positions in index order.
pub const ALL_POSITIONS: [Position; POSITION_COUNT] = [
    Position::A1, Position::A4, Position::A7,
    Position::B2, Position::B4, Position::B6,
    Position::C3, Position::C4, Position::C5,
    Position::D1, Position::D2, Position::D3,
    Position::D5, Position::D6, Position::D7,
    Position::E3, Position::E4, Position::E5,
    Position::F2, Position::F4, Position::F6,
    Position::G1, Position::G4, Position::G7,
];

/// (column, row) for each position, indexed by discriminant.
const COORDS: [(char, u8); POSITION_COUNT] = [
    ('a', 1), ('a', 4), ('a', 7),
    ('b', 2), ('b', 4), ('b', 6),
    ('c', 3), ('c', 4), ('c', 5),
    ('d', 1), ('d', 2), ('d', 3),
    ('d', 5), ('d', 6), ('d', 7),
    ('e', 3), ('e', 4), ('e', 5),
    ('f', 2), ('f', 4), ('f', 6),
    ('g', 1), ('g', 4), ('g', 7),
];

impl Position {
    /// Returns the array index for this position.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the column letter ('a'..='g').
    pub const fn column(self) -> char {
        COORDS[self as usize].0
    }

    /// Returns the row number (1..=7).
    pub const fn row(self) -> u8 {
        COORDS[self as usize].1
    }

    /// Looks up the position at a column/row pair. Returns `None` for pairs
    /// that are not points on the board.
    pub fn from_coords(column: char, row: u8) -> Option<Position> {
        let column = column.to_ascii_lowercase();
        COORDS
            .iter()
            .position(|&(c, r)| c == column && r == row)
            .map(|i| ALL_POSITIONS[i])
    }

    /// Parses a two-character point name such as `d2`.
    pub fn from_notation(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let column = chars.next()?;
        let row = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Position::from_coords(column, row as u8)
    }

    /// Returns the two-character point name, e.g. `"d2"`.
    pub fn notation(self) -> String {
        format!("{}{}", self.column(), self.row())
    }

    /// Reflects the position across the vertical axis (a<->g, b<->f, c<->e).
    pub fn mirror(self) -> Position {
        let (column, row) = COORDS[self as usize];
        let mirrored = (b'a' + b'g' - column as u8) as char;
        // The board is symmetric under this reflection, so the lookup always hits.
        Position::from_coords(mirrored, row).unwrap_or(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}
