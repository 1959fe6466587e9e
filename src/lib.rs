//! Nine Men's Morris engine library.
//!
//! Exposes the board representation, move generation, evaluation, search,
//! agents, notation, and self-play modules for use by integration tests and
//! the `selfplay` binary.

pub mod agent;
pub mod board;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
