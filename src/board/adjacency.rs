//! Adjacency graph for the Nine Men's Morris board.
//!
//! Each point lists the points a piece may slide to in the movement phase.
//! The table is symmetric: if A lists B then B lists A. All data is
//! compile-time `static`, indexed by `Position as usize`.
//!
//! The neighbour order within each entry is fixed and drives the order in
//! which movement actions are generated.

use super::position::{Position, POSITION_COUNT};

use Position::*;

/// Total number of directed edges (32 undirected lines between points).
pub const EDGE_COUNT: usize = 64;

/// Neighbours of every point, indexed by `Position as usize`.
pub static ADJACENT: [&[Position]; POSITION_COUNT] = [
    /* a1 */ &[A4, D1],
    /* a4 */ &[A7, A1, B4],
    /* a7 */ &[A4, D7],
    /* b2 */ &[B4, D2],
    /* b4 */ &[B6, C4, B2, A4],
    /* b6 */ &[B4, D6],
    /* c3 */ &[D3, C4],
    /* c4 */ &[C5, C3, B4],
    /* c5 */ &[C4, D5],
    /* d1 */ &[A1, D2, G1],
    /* d2 */ &[D3, F2, B2, D1],
    /* d3 */ &[E3, D2, C3],
    /* d5 */ &[D6, E5, C5],
    /* d6 */ &[D7, F6, D5, B6],
    /* d7 */ &[A7, G7, D6],
    /* e3 */ &[D3, E4],
    /* e4 */ &[E5, F4, E3],
    /* e5 */ &[D5, E4],
    /* f2 */ &[D2, F4],
    /* f4 */ &[F6, G4, F2, E4],
    /* f6 */ &[D6, F4],
    /* g1 */ &[D1, G4],
    /* g4 */ &[G7, G1, F4],
    /* g7 */ &[D7, G4],
];

/// Returns the points adjacent to `pos`.
#[inline]
pub fn adjacent(pos: Position) -> &'static [Position] {
    ADJACENT[pos as usize]
}

/// Returns true if a piece on `a` may slide directly to `b`.
#[inline]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    adjacent(a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::super::position::ALL_POSITIONS;
    use super::*;

    #[test]
    fn edge_count() {
        let total: usize = ADJACENT.iter().map(|n| n.len()).sum();
        assert_eq!(total, EDGE_COUNT);
    }

    #[test]
    fn adjacency_symmetry() {
        for a in ALL_POSITIONS {
            for &b in adjacent(a) {
                assert!(
                    is_adjacent(b, a),
                    "{} lists {} but not the reverse",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn no_self_adjacency_or_duplicates() {
        for a in ALL_POSITIONS {
            let n = adjacent(a);
            assert!(!n.contains(&a), "{} is adjacent to itself", a);
            for (i, x) in n.iter().enumerate() {
                assert!(!n[i + 1..].contains(x), "{} lists {} twice", a, x);
            }
        }
    }

    #[test]
    fn degree_distribution() {
        let count = |d: usize| ALL_POSITIONS.iter().filter(|p| adjacent(**p).len() == d).count();
        // 12 corners, 8 outer/inner midpoints, 4 middle-square midpoints.
        assert_eq!(count(2), 12);
        assert_eq!(count(3), 8);
        assert_eq!(count(4), 4);
    }

    #[test]
    fn neighbours_share_a_row_or_column() {
        for a in ALL_POSITIONS {
            for &b in adjacent(a) {
                assert!(a.column() == b.column() || a.row() == b.row());
            }
        }
    }

    #[test]
    fn center_is_not_crossed() {
        assert!(!is_adjacent(C4, E4));
        assert!(!is_adjacent(D3, D5));
        assert!(is_adjacent(B4, C4));
        assert!(is_adjacent(D2, D3));
    }

    #[test]
    fn adjacency_commutes_with_mirror() {
        for a in ALL_POSITIONS {
            for b in ALL_POSITIONS {
                assert_eq!(is_adjacent(a, b), is_adjacent(a.mirror(), b.mirror()));
            }
        }
    }
}
