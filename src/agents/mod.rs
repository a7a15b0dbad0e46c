//! Computer opponents.
//!
//! All agents implement the [`ActionSelector`] trait. Agents only decide; the
//! [`Match`](crate::game_state::Match) validates and commits their choice.

use crate::board::{Cell, PlayerId, Wall};
use crate::game_state::Match;

pub mod greedy_agent;
pub mod random_agent;

pub use greedy_agent::{AgentConfig, GreedyAgent};
pub use random_agent::RandomAgent;

/// What a player did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentAction {
    Move { from: Cell, to: Cell },
    Wall(Wall),
    /// No ordinary step was available; only the turn changed hands.
    Pass,
}

/// Trait for agents that select an action for `player` in the given match.
pub trait ActionSelector {
    /// Decide `player`'s action. Called only while it is `player`'s turn.
    ///
    /// Falling back (no wall found, no step available) is not an error: the
    /// agent returns a move or [`AgentAction::Pass`] instead.
    fn select_action(&mut self, game: &Match, player: PlayerId) -> AgentAction;
}
