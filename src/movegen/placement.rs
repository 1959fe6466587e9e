//! Placement-phase action generation.

use crate::board::{Action, GameState, ALL_POSITIONS};

use super::push_branching;

/// Generates a placement on every empty point, in point order.
pub fn placements(state: &GameState, out: &mut Vec<Action>, stop_at_first: bool) {
    let mover = state.side_to_move();
    for pos in ALL_POSITIONS {
        if state.occupant(pos).is_some() {
            continue;
        }
        if push_branching(state, Action::place(mover, pos), out, stop_at_first) {
            return;
        }
    }
}
