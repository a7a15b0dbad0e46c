//! Baseline agent that picks a legal action uniformly at random.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::{ActionSelector, AgentAction};
use crate::board::{PlayerId, Wall};
use crate::game_state::Match;

/// An agent that selects a random legal move or wall placement.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Every action `player` could legally take right now.
pub fn legal_actions(game: &Match, player: PlayerId) -> Vec<AgentAction> {
    let from = game.position(player);
    let mut actions: Vec<AgentAction> = game
        .legal_destinations(player)
        .into_iter()
        .map(|to| AgentAction::Move { from, to })
        .collect();

    if game.walls_remaining(player) > 0 {
        actions.extend(
            Wall::all(game.board().size())
                .filter(|wall| game.is_wall_legal(wall))
                .map(AgentAction::Wall),
        );
    }
    actions
}

impl ActionSelector for RandomAgent {
    fn select_action(&mut self, game: &Match, player: PlayerId) -> AgentAction {
        let actions = legal_actions(game, player);
        if actions.is_empty() {
            return AgentAction::Pass;
        }
        actions[self.rng.gen_range(0..actions.len())]
    }
}
