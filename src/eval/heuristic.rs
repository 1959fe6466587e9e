//! Heuristic position evaluation.
//!
//! A handful of additive terms, all from the perspective of one color:
//!
//! - a blocked side to move loses (`NO_MOVES_VALUE`);
//! - a side reduced to two pieces after placement loses (`TWO_PIECES_VALUE`);
//! - the most recent action closing a mill is rewarded (`MILL_FORMED_VALUE`);
//! - material difference counts `PIECE_VALUE` per piece.
//!
//! A repetition draw overrides everything with 0.

use crate::board::{Color, GameState, PLACEMENT_TURNS};

/// Side to move has no legal action.
pub const NO_MOVES_VALUE: i32 = 10_000;
/// A side is down to two pieces and can no longer close a mill.
pub const TWO_PIECES_VALUE: i32 = 20_000;
/// Latest action removed an opponent piece.
pub const MILL_FORMED_VALUE: i32 = 300;
/// Per-piece material weight.
pub const PIECE_VALUE: i32 = 200;

/// Evaluates `state` from `perspective`. Positive favours `perspective`.
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    if state.is_repetitive_draw() {
        return 0;
    }

    let own = state.piece_count(perspective) as i32;
    let opp = state.piece_count(perspective.opponent()) as i32;
    let mut score = 0;

    if state.legal_actions(true).is_empty() {
        if state.side_to_move() == perspective {
            score -= NO_MOVES_VALUE;
        } else {
            score += NO_MOVES_VALUE;
        }
    }

    if state.turn() > PLACEMENT_TURNS {
        if own == 2 {
            score -= TWO_PIECES_VALUE;
        } else if opp == 2 {
            score += TWO_PIECES_VALUE;
        }
    }

    if let Some(last) = state.last_action() {
        if last.capture.is_some() {
            if last.color == perspective {
                score += MILL_FORMED_VALUE;
            } else {
                score -= MILL_FORMED_VALUE;
            }
        }
    }

    score + (own - opp) * PIECE_VALUE
}
