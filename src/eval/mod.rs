//! Position evaluation.
//!
//! Scores a game state from one color's perspective using material,
//! mobility, and recent mill formation.

pub(crate) mod heuristic;

pub use heuristic::{
    evaluate, MILL_FORMED_VALUE, NO_MOVES_VALUE, PIECE_VALUE, TWO_PIECES_VALUE,
};
