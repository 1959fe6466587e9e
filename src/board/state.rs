//! Game state representation.
//!
//! Holds a complete snapshot of a game: occupancy of the 24 points, the
//! per-color piece sets, the turn counter, a bounded action history used for
//! repetition detection, and the utility cached by the last evaluation.
//!
//! States have value semantics. `apply` and `result` return a new state and
//! never touch the receiver, so a search node and its children share nothing.

use std::collections::VecDeque;

use super::action::Action;
use super::adjacency::{adjacent, is_adjacent};
use super::piece::{Color, PieceSet};
use super::position::{Position, POSITION_COUNT};

/// Number of past actions kept for repetition detection.
pub const HISTORY_LEN: usize = 16;

/// Turns 1..=PLACEMENT_TURNS are placement plies (5 per side).
pub const PLACEMENT_TURNS: u32 = 10;

/// Upper bound on pieces per side.
pub const MAX_PIECES: usize = 9;

/// Occupancy of every point, indexed by `Position as usize`.
pub type Cells = [Option<Color>; POSITION_COUNT];

/// The phase of play for the side to move. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pieces are placed on empty points.
    Placement,
    /// Pieces slide to adjacent empty points.
    Movement,
    /// Three pieces left: pieces jump to any empty point.
    Flying,
    /// Fewer than three pieces: no legal actions.
    Defeated,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// Reasons an action cannot be applied to a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAction {
    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Color, got: Color },

    #[error("action does not fit the {0:?} phase")]
    WrongPhase(Phase),

    #[error("destination {0} is occupied")]
    DestinationOccupied(Position),

    #[error("no piece of the mover at source {0}")]
    SourceNotOwned(Position),

    #[error("{from} is not adjacent to {to}")]
    NotAdjacent { from: Position, to: Position },

    #[error("capture target {0} is not an opponent piece")]
    InvalidCapture(Position),

    #[error("capture of {0} without forming a mill")]
    CaptureWithoutMill(Position),

    #[error("action forms a mill but names no capture")]
    MissingCapture,
}

/// Complete game state at a point in time.
///
/// Uses fixed-size arrays and bit sets so that cloning is cheap apart from
/// the short history buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    cells: Cells,
    white: PieceSet,
    black: PieceSet,
    turn: u32,
    history: VecDeque<Action>,
    utility: i32,
    repetition: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Creates the starting state: empty board, White to place, turn 1.
    pub fn new() -> Self {
        GameState {
            cells: [None; POSITION_COUNT],
            white: PieceSet::new(),
            black: PieceSet::new(),
            turn: 1,
            history: VecDeque::with_capacity(HISTORY_LEN),
            utility: 0,
            repetition: false,
        }
    }

    /// Puts a piece on the board without consuming a turn. Used to set up
    /// positions. Returns false if the point is already occupied.
    pub fn place_piece(&mut self, color: Color, pos: Position) -> bool {
        if self.cells[pos.index()].is_some() {
            return false;
        }
        self.cells[pos.index()] = Some(color);
        self.pieces_mut(color).insert(pos);
        true
    }

    /// Sets the turn counter. Used to set up positions.
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn.max(1);
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the color on `pos`, if any.
    #[inline]
    pub fn occupant(&self, pos: Position) -> Option<Color> {
        self.cells[pos.index()]
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn pieces(&self, color: Color) -> PieceSet {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).len()
    }

    fn pieces_mut(&mut self, color: Color) -> &mut PieceSet {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Recent actions, oldest first, at most `HISTORY_LEN` of them.
    pub fn history(&self) -> &VecDeque<Action> {
        &self.history
    }

    pub fn last_action(&self) -> Option<&Action> {
        self.history.back()
    }

    /// Utility cached by the most recent `score` call (or inherited from
    /// the parent state when this state was never scored).
    pub fn utility(&self) -> i32 {
        self.utility
    }

    /// Odd turns belong to White, even turns to Black.
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns the phase for the side to move.
    pub fn phase(&self) -> Phase {
        if self.turn <= PLACEMENT_TURNS {
            return Phase::Placement;
        }
        match self.piece_count(self.side_to_move()) {
            n if n > 3 => Phase::Movement,
            3 => Phase::Flying,
            _ => Phase::Defeated,
        }
    }

    /// Returns true if `pos` completes three in a row for `color`.
    pub fn forms_mill(&self, color: Color, pos: Position) -> bool {
        mill_at(&self.cells, color, pos)
    }

    /// Returns true if `action` would complete a mill for its color. The
    /// hypothetical occupancy is discarded afterwards.
    pub fn would_form_mill(&self, action: &Action) -> bool {
        let mut cells = self.cells;
        if let Some(src) = action.source {
            cells[src.index()] = None;
        }
        cells[action.destination.index()] = Some(action.color);
        mill_at(&cells, action.color, action.destination)
    }

    /// Enumerates the legal actions of the side to move. With
    /// `stop_at_first`, returns after the first one found.
    pub fn legal_actions(&self, stop_at_first: bool) -> Vec<Action> {
        crate::movegen::legal_actions(self, stop_at_first)
    }

    /// Scores this state from `perspective` without caching.
    pub fn evaluate(&self, perspective: Color) -> i32 {
        crate::eval::evaluate(self, perspective)
    }

    /// Scores this state from `perspective` and caches the value.
    pub fn score(&mut self, perspective: Color) -> i32 {
        self.utility = crate::eval::evaluate(self, perspective);
        self.utility
    }

    /// True once a side is down to two pieces after placement, or the side
    /// to move has no legal action.
    pub fn is_terminal(&self) -> bool {
        if self.turn > PLACEMENT_TURNS && (self.white.len() <= 2 || self.black.len() <= 2) {
            return true;
        }
        self.legal_actions(true).is_empty()
    }

    /// True when the history is full and its two halves are identical.
    pub fn is_repetitive_draw(&self) -> bool {
        self.repetition
    }

    /// Classifies a finished game. Returns `None` while play continues.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.repetition {
            return Some(Outcome::Draw);
        }
        if self.turn > PLACEMENT_TURNS {
            if self.white.len() <= 2 {
                return Some(Outcome::Win(Color::Black));
            }
            if self.black.len() <= 2 {
                return Some(Outcome::Win(Color::White));
            }
        }
        if self.legal_actions(true).is_empty() {
            return Some(Outcome::Win(self.side_to_move().opponent()));
        }
        None
    }

    /// Checks every precondition of `action` against this state.
    pub fn validate(&self, action: &Action) -> Result<(), InvalidAction> {
        let mover = self.side_to_move();
        if action.color != mover {
            return Err(InvalidAction::WrongTurn {
                expected: mover,
                got: action.color,
            });
        }

        let phase = self.phase();
        match (phase, action.source) {
            (Phase::Placement, None) | (Phase::Movement | Phase::Flying, Some(_)) => {}
            _ => return Err(InvalidAction::WrongPhase(phase)),
        }

        let dest = action.destination;
        if self.occupant(dest).is_some() {
            return Err(InvalidAction::DestinationOccupied(dest));
        }

        if let Some(src) = action.source {
            if self.occupant(src) != Some(mover) {
                return Err(InvalidAction::SourceNotOwned(src));
            }
            if phase == Phase::Movement && !is_adjacent(src, dest) {
                return Err(InvalidAction::NotAdjacent { from: src, to: dest });
            }
        }

        let mill = self.would_form_mill(action);
        match action.capture {
            Some(target) => {
                if self.occupant(target) != Some(mover.opponent()) {
                    return Err(InvalidAction::InvalidCapture(target));
                }
                if !mill {
                    return Err(InvalidAction::CaptureWithoutMill(target));
                }
            }
            None => {
                if mill && !self.pieces(mover.opponent()).is_empty() {
                    return Err(InvalidAction::MissingCapture);
                }
            }
        }
        Ok(())
    }

    /// Returns the state after `action`, or the reason it is illegal.
    pub fn apply(&self, action: &Action) -> Result<GameState, InvalidAction> {
        self.validate(action)?;
        Ok(self.transition(action))
    }

    /// Returns the state after an action the caller generated itself.
    ///
    /// When `score_for` is set, the new state is evaluated from that color's
    /// perspective and the utility cached on it.
    pub fn result(&self, action: &Action, score_for: Option<Color>) -> GameState {
        debug_assert!(
            self.validate(action).is_ok(),
            "illegal action in search: {}",
            action
        );
        let mut next = self.transition(action);
        if let Some(perspective) = score_for {
            next.score(perspective);
        }
        next
    }

    fn transition(&self, action: &Action) -> GameState {
        let mut next = self.clone();
        let mover = action.color;

        if let Some(src) = action.source {
            next.cells[src.index()] = None;
            next.pieces_mut(mover).remove(src);
        }
        next.cells[action.destination.index()] = Some(mover);
        next.pieces_mut(mover).insert(action.destination);

        if let Some(target) = action.capture {
            if let Some(owner) = next.cells[target.index()].take() {
                next.pieces_mut(owner).remove(target);
            }
        }

        next.turn += 1;
        if next.history.len() == HISTORY_LEN {
            next.history.pop_front();
        }
        next.history.push_back(*action);
        next.repetition = history_repeats(&next.history);
        next
    }
}

/// Mill test on a raw occupancy array.
///
/// Checks both the middle of a line (two friendly neighbours sharing a row
/// or column) and its ends (a friendly neighbour whose own friendly
/// neighbour lines up with `pos`).
fn mill_at(cells: &Cells, color: Color, pos: Position) -> bool {
    let friendly = |p: Position| cells[p.index()] == Some(color);
    let neighbours = adjacent(pos);

    for (i, &a) in neighbours.iter().enumerate() {
        if !friendly(a) {
            continue;
        }
        for &b in &neighbours[i + 1..] {
            if friendly(b) && (a.column() == b.column() || a.row() == b.row()) {
                return true;
            }
        }
    }

    for &n in neighbours {
        if !friendly(n) {
            continue;
        }
        for &x in adjacent(n) {
            if x != pos && friendly(x) && (x.column() == pos.column() || x.row() == pos.row()) {
                return true;
            }
        }
    }
    false
}

/// True if the history is full and its first half equals its second half.
fn history_repeats(history: &VecDeque<Action>) -> bool {
    if history.len() < HISTORY_LEN {
        return false;
    }
    let half = HISTORY_LEN / 2;
    history
        .iter()
        .take(half)
        .zip(history.iter().skip(half))
        .all(|(a, b)| a == b)
}
