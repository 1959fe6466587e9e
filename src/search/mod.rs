//! Search and planning.
//!
//! Iterative-deepening alpha-beta minimax over the action tree, scored by
//! the heuristic evaluator.

pub mod alphabeta;

pub use alphabeta::{choose_action, search, SearchConfig, SearchInfo, SearchResult, INFINITY};
