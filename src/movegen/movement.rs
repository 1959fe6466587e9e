//! Movement-phase action generation.
//!
//! Sliding moves follow the adjacency table. Flying moves, available to a
//! side reduced to three pieces, may land on any empty point.

use crate::board::{adjacent, Action, GameState, ALL_POSITIONS};

use super::push_branching;

/// Generates every slide of an own piece to an adjacent empty point.
///
/// Pieces are visited in point order and their targets in adjacency order.
pub fn slides(state: &GameState, out: &mut Vec<Action>, stop_at_first: bool) {
    let mover = state.side_to_move();
    for piece in state.pieces(mover).iter() {
        for &dest in adjacent(piece) {
            if state.occupant(dest).is_some() {
                continue;
            }
            if push_branching(state, Action::shift(mover, piece, dest), out, stop_at_first) {
                return;
            }
        }
    }
}

/// Generates every flight of an own piece to any empty point.
pub fn flights(state: &GameState, out: &mut Vec<Action>, stop_at_first: bool) {
    let mover = state.side_to_move();
    for piece in state.pieces(mover).iter() {
        for dest in ALL_POSITIONS {
            if state.occupant(dest).is_some() {
                continue;
            }
            if push_branching(state, Action::shift(mover, piece, dest), out, stop_at_first) {
                return;
            }
        }
    }
}
