//! Action notation encoding and decoding.
//!
//! An action is written as the mover's color letter, a space, and the
//! target point, optionally preceded by a source point and a dash, and
//! optionally followed by `x` and the captured point:
//!
//! ```text
//! W d2          placement
//! B b4-a4       slide or flight
//! W d3xb4       placement closing a mill, removing b4
//! B b4-a4xd2    move closing a mill, removing d2
//! ```

use thiserror::Error;

use crate::board::{Action, Color, Position};

/// Errors that can occur when parsing action notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown point '{0}'")]
    UnknownPoint(String),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(String),
}

/// Formats an action in notation.
pub fn format_action(action: &Action) -> String {
    let mut out = String::with_capacity(10);
    out.push(action.color.abbr());
    out.push(' ');
    if let Some(src) = action.source {
        out.push_str(&src.notation());
        out.push('-');
    }
    out.push_str(&action.destination.notation());
    if let Some(target) = action.capture {
        out.push('x');
        out.push_str(&target.notation());
    }
    out
}

/// Parses a single action from notation.
pub fn parse_action(s: &str) -> Result<Action, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    let (color_token, body) = match s.split_once(' ') {
        Some((c, rest)) => (c, rest.trim()),
        None => (s, ""),
    };
    let color = parse_color(color_token)?;
    if body.is_empty() {
        return Err(NotationError::UnexpectedEnd("destination".to_string()));
    }

    let (movement, capture) = match body.split_once('x') {
        Some((m, target)) => (m, Some(parse_point(target)?)),
        None => (body, None),
    };
    let (source, destination) = match movement.split_once('-') {
        Some((src, dest)) => (Some(parse_point(src)?), parse_point(dest)?),
        None => (None, parse_point(movement)?),
    };

    Ok(Action::new(color, source, destination, capture))
}

fn parse_color(token: &str) -> Result<Color, NotationError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Color::from_abbr(c).ok_or_else(|| NotationError::UnknownColor(token.to_string()))
        }
        _ => Err(NotationError::UnknownColor(token.to_string())),
    }
}

fn parse_point(token: &str) -> Result<Position, NotationError> {
    if token.is_empty() {
        return Err(NotationError::UnexpectedEnd("point".to_string()));
    }
    Position::from_notation(token).ok_or_else(|| NotationError::UnknownPoint(token.to_string()))
}
