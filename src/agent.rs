//! Players.
//!
//! An agent owns one color and picks an action for it whenever asked. The
//! game loop never inspects how the choice was made.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Action, Color, GameState};
use crate::movegen::random_action;
use crate::search::{search, SearchConfig};

/// A player that chooses actions for one color.
pub trait Agent {
    fn color(&self) -> Color;

    /// Chooses an action for the side to move. Returns `None` when there is
    /// nothing legal to play.
    fn decide(&mut self, state: &GameState) -> Option<Action>;
}

/// Plays the best action found by alpha-beta search.
pub struct SearchAgent {
    color: Color,
    config: SearchConfig,
}

impl SearchAgent {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        SearchAgent { color, config }
    }
}

impl Agent for SearchAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn decide(&mut self, state: &GameState) -> Option<Action> {
        search(state, &self.config, self.color, &mut std::io::sink()).action
    }
}

/// Plays a uniformly random legal action.
pub struct RandomAgent {
    color: Color,
    rng: SmallRng,
}

impl RandomAgent {
    /// Creates an agent with a fixed seed, for reproducible games.
    pub fn seeded(color: Color, seed: u64) -> Self {
        RandomAgent {
            color,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates an agent seeded from system entropy.
    pub fn from_entropy(color: Color) -> Self {
        RandomAgent {
            color,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Agent for RandomAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn decide(&mut self, state: &GameState) -> Option<Action> {
        random_action(state, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_agent_plays_legal_action() {
        let state = GameState::new();
        let mut agent = SearchAgent::new(
            Color::White,
            SearchConfig {
                max_depth: 1,
                threads: 1,
            },
        );
        let action = agent.decide(&state).unwrap();
        assert!(state.apply(&action).is_ok());
        assert_eq!(agent.color(), Color::White);
    }

    #[test]
    fn seeded_random_agents_agree() {
        let mut state = GameState::new();
        let mut a = RandomAgent::seeded(Color::White, 9);
        let mut b = RandomAgent::seeded(Color::White, 9);
        for _ in 0..3 {
            let x = a.decide(&state).unwrap();
            assert_eq!(Some(x), b.decide(&state));
            state = state.apply(&x).unwrap();
            let reply = state.legal_actions(true)[0];
            state = state.apply(&reply).unwrap();
        }
    }

    #[test]
    fn agents_are_object_safe() {
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(RandomAgent::from_entropy(Color::White)),
            Box::new(SearchAgent::new(Color::Black, SearchConfig::default())),
        ];
        assert_eq!(agents[0].color(), Color::White);
        assert_eq!(agents[1].color(), Color::Black);
    }
}
