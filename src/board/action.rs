//! The action type: one ply of play.
//!
//! A single value covers all three phases. A placement has no source, a
//! move (sliding or flying) has one, and an action that closes a mill names
//! the opponent piece it removes.

use super::piece::Color;
use super::position::Position;

/// One ply: who acts, where from, where to, and what is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub color: Color,
    /// `None` for a placement.
    pub source: Option<Position>,
    pub destination: Position,
    /// Opponent piece removed because this action formed a mill.
    pub capture: Option<Position>,
}

impl Action {
    /// Creates an action from raw fields.
    pub fn new(
        color: Color,
        source: Option<Position>,
        destination: Position,
        capture: Option<Position>,
    ) -> Self {
        Action {
            color,
            source,
            destination,
            capture,
        }
    }

    /// Creates a placement without a capture.
    pub fn place(color: Color, destination: Position) -> Self {
        Action::new(color, None, destination, None)
    }

    /// Creates a move (slide or fly) without a capture.
    pub fn shift(color: Color, source: Position, destination: Position) -> Self {
        Action::new(color, Some(source), destination, None)
    }

    /// Returns a copy of this action that removes the piece at `target`.
    pub fn capturing(self, target: Position) -> Self {
        Action {
            capture: Some(target),
            ..self
        }
    }

    pub fn is_placement(&self) -> bool {
        self.source.is_none()
    }

    /// Returns a human-readable sentence for presentation layers.
    pub fn describe(&self) -> String {
        let mut out = match self.source {
            None => format!("{} places at {}", self.color.name(), self.destination),
            Some(src) => format!(
                "{} moves {} to {}",
                self.color.name(),
                src,
                self.destination
            ),
        };
        match self.capture {
            Some(target) => out.push_str(&format!(", removing {}", target)),
            None => out.push_str(", no capture"),
        }
        out
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::protocol::notation::format_action(self))
    }
}
