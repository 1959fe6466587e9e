//! Board representation and game-state types.
//!
//! Contains the core data structures for points, pieces, adjacency,
//! actions, and the overall game state.

pub mod action;
pub mod adjacency;
pub mod piece;
pub mod position;
pub mod state;

pub use action::Action;
pub use adjacency::{adjacent, is_adjacent, ADJACENT, EDGE_COUNT};
pub use piece::{Color, PieceSet};
pub use position::{Position, ALL_POSITIONS, POSITION_COUNT};
pub use state::{
    GameState, InvalidAction, Outcome, Phase, HISTORY_LEN, MAX_PIECES, PLACEMENT_TURNS,
};
