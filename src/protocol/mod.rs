//! Text protocol for actions.
//!
//! A compact, reversible notation used in game records and log output.

pub mod notation;

pub use notation::{format_action, parse_action, NotationError};
