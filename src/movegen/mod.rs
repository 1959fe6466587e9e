//! Legal action generation.
//!
//! Generates the legal actions of the side to move, dispatched on the
//! phase: placement, sliding movement, or flying. Generation order is
//! deterministic so that search results are reproducible.

pub mod movement;
pub mod placement;

use rand::Rng;

use crate::board::{Action, GameState, Phase};

/// Enumerates the legal actions of the side to move.
///
/// With `stop_at_first` the generator returns as soon as one action exists,
/// which is all the terminal test needs.
pub fn legal_actions(state: &GameState, stop_at_first: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    match state.phase() {
        Phase::Placement => placement::placements(state, &mut actions, stop_at_first),
        Phase::Movement => movement::slides(state, &mut actions, stop_at_first),
        Phase::Flying => movement::flights(state, &mut actions, stop_at_first),
        Phase::Defeated => {}
    }
    actions
}

/// Picks one legal action uniformly at random. Returns `None` when the side
/// to move has no legal action.
pub fn random_action(state: &GameState, rng: &mut impl Rng) -> Option<Action> {
    let actions = legal_actions(state, false);
    if actions.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..actions.len());
    Some(actions[idx])
}

/// Appends `base`, or one copy per opponent piece if it closes a mill.
///
/// A mill against an empty opponent side yields the capture-less action.
/// Returns true once the caller should stop generating.
pub(crate) fn push_branching(
    state: &GameState,
    base: Action,
    out: &mut Vec<Action>,
    stop_at_first: bool,
) -> bool {
    let targets = state.pieces(base.color.opponent());
    if !targets.is_empty() && state.would_form_mill(&base) {
        for target in targets.iter() {
            out.push(base.capturing(target));
            if stop_at_first {
                return true;
            }
        }
    } else {
        out.push(base);
        if stop_at_first {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Position, ALL_POSITIONS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use Position::*;

    fn setup(turn: u32, white: &[Position], black: &[Position]) -> GameState {
        let mut state = GameState::new();
        for &p in white {
            state.place_piece(Color::White, p);
        }
        for &p in black {
            state.place_piece(Color::Black, p);
        }
        state.set_turn(turn);
        state
    }

    #[test]
    fn opening_has_one_placement_per_point() {
        let actions = legal_actions(&GameState::new(), false);
        assert_eq!(actions.len(), 24);
        assert!(actions.iter().all(|a| a.is_placement() && a.capture.is_none()));
        let dests: Vec<Position> = actions.iter().map(|a| a.destination).collect();
        assert_eq!(dests, ALL_POSITIONS.to_vec());
    }

    #[test]
    fn stop_at_first_returns_one_action() {
        let state = GameState::new();
        let first = legal_actions(&state, true);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0], legal_actions(&state, false)[0]);
    }

    #[test]
    fn mill_placement_branches_per_capture_target() {
        let mut state = GameState::new();
        for a in [
            Action::place(Color::White, D2),
            Action::place(Color::Black, B4),
            Action::place(Color::White, F2),
            Action::place(Color::Black, A7),
            Action::place(Color::White, D1),
            Action::place(Color::Black, G7),
        ] {
            state = state.apply(&a).unwrap();
        }
        let actions = legal_actions(&state, false);
        let at_d3: Vec<&Action> = actions.iter().filter(|a| a.destination == D3).collect();
        assert_eq!(at_d3.len(), 3);
        let captures: Vec<Position> = at_d3.iter().filter_map(|a| a.capture).collect();
        assert_eq!(captures, vec![A7, B4, G7]);

        // b2 closes b2-d2-f2 as well; every other empty point is plain.
        assert_eq!(actions.iter().filter(|a| a.destination == B2).count(), 3);
        assert_eq!(actions.len(), 16 + 2 * 3);
    }

    #[test]
    fn movement_uses_adjacency_order() {
        let state = setup(11, &[B4, A1, D7, G7], &[B2, B6, F2, F6]);
        let from_b4: Vec<Position> = legal_actions(&state, false)
            .iter()
            .filter(|a| a.source == Some(B4))
            .map(|a| a.destination)
            .collect();
        assert_eq!(from_b4, vec![C4, A4]);
    }

    #[test]
    fn movement_branches_on_mill() {
        let state = setup(11, &[A1, A7, B4, G7], &[C5, E3, G1, F6]);
        let actions = legal_actions(&state, false);
        let mills: Vec<&Action> = actions
            .iter()
            .filter(|a| a.source == Some(B4) && a.destination == A4)
            .collect();
        assert_eq!(mills.len(), 4);
        assert!(mills.iter().all(|a| a.capture.is_some()));
    }

    #[test]
    fn flying_reaches_every_empty_point() {
        let state = setup(11, &[A1, A7, G7], &[B2, B6, F2, F6]);
        assert_eq!(state.phase(), Phase::Flying);
        let actions = legal_actions(&state, false);
        // 3 pieces x 17 empty points, plus 3 extra branches for each of the
        // two mill-closing flights (g7->a4 and a1->d7).
        assert_eq!(actions.len(), 3 * 17 + 2 * 3);
        assert!(actions
            .iter()
            .any(|a| a.source == Some(A1) && a.destination == E4));
    }

    #[test]
    fn defeated_and_blocked_sides_have_no_actions() {
        let defeated = setup(11, &[A1, A7], &[B2, B6, F2, F6]);
        assert_eq!(defeated.phase(), Phase::Defeated);
        assert!(legal_actions(&defeated, false).is_empty());

        let blocked = setup(11, &[A1, A7, G1, G7], &[A4, D1, D7, G4]);
        assert!(legal_actions(&blocked, false).is_empty());
        assert!(legal_actions(&blocked, true).is_empty());
    }

    #[test]
    fn mill_against_empty_side_keeps_placement() {
        let state = setup(5, &[D1, D2], &[]);
        let actions = legal_actions(&state, false);
        let d3: Vec<&Action> = actions.iter().filter(|a| a.destination == D3).collect();
        assert_eq!(d3.len(), 1);
        assert_eq!(d3[0].capture, None);
    }

    #[test]
    fn generated_actions_are_always_legal() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..30 {
            let mut state = GameState::new();
            for _ in 0..200 {
                let actions = legal_actions(&state, false);
                for a in &actions {
                    assert!(state.validate(a).is_ok(), "{} illegal at turn {}", a, state.turn());
                }
                for color in [Color::White, Color::Black] {
                    for p in ALL_POSITIONS {
                        assert_eq!(
                            state.pieces(color).contains(p),
                            state.occupant(p) == Some(color)
                        );
                    }
                    assert!(state.piece_count(color) <= crate::board::MAX_PIECES);
                }
                if state.is_terminal() || state.is_repetitive_draw() {
                    break;
                }
                let Some(action) = random_action(&state, &mut rng) else {
                    break;
                };
                state = state.apply(&action).unwrap();
            }
        }
    }

    #[test]
    fn random_action_is_a_legal_action() {
        let mut rng = SmallRng::seed_from_u64(3);
        let state = setup(11, &[A1, A7, B4, G7], &[C5, E3, G1, F6]);
        let legal = legal_actions(&state, false);
        for _ in 0..50 {
            let a = random_action(&state, &mut rng).unwrap();
            assert!(legal.contains(&a));
        }
        let blocked = setup(11, &[A1, A7, G1, G7], &[A4, D1, D7, G4]);
        assert_eq!(random_action(&blocked, &mut rng), None);
    }
}
