//! One-ply greedy opponent.
//!
//! The agent looks exactly one action ahead. When the opponent is close to
//! its goal it sometimes tries a wall next to the opponent; otherwise it takes
//! the ordinary step that most shortens its own path. There is no search over
//! replies.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::agents::{ActionSelector, AgentAction};
use crate::board::{Board, Cell, Direction, Orientation, Pawn, PlayerId, RelativeDirection, Wall};
use crate::error::ConfigError;
use crate::game_state::Match;
use crate::movement::step_destinations;
use crate::pathfinding::shortest_distance;
use crate::validation::is_wall_legal;

/// Tuning for [`GreedyAgent`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Chance of trying a wall once the opponent is within range.
    pub wall_probability: f64,
    /// Opponent goal distance at or below which walls are considered.
    pub wall_trigger_distance: u32,
    /// Wall anchors are tried this many cells around the opponent.
    pub search_radius: u8,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            wall_probability: 0.7,
            wall_trigger_distance: 3,
            search_radius: 1,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(ConfigError::WallProbability(self.wall_probability));
        }
        if self.search_radius > 3 {
            return Err(ConfigError::SearchRadius(self.search_radius));
        }
        Ok(())
    }
}

/// Greedy agent: one wall attempt or one shortest-path step per turn.
pub struct GreedyAgent {
    config: AgentConfig,
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(AgentConfig {
            seed: Some(seed),
            ..AgentConfig::default()
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Walls anchored around the opponent. The wall straight across its
    /// forward edge comes first, then the rest by distance from it, horizontal
    /// before vertical.
    fn wall_candidates(&self, target: &Pawn, board_size: u8) -> Vec<Wall> {
        let r = self.config.search_radius as i16;
        let front_dr: i16 = if target.goal_row > target.position.row { 0 } else { -1 };

        let mut candidates = Vec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                let Some(anchor) = target.position.offset(dc, dr, board_size) else {
                    continue;
                };
                let rank = (dr - front_dr).abs() + dc.abs();
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    candidates.push((rank, orientation, Wall::new(anchor, orientation)));
                }
            }
        }
        candidates.sort_by_key(|&(rank, orientation, _)| (rank, orientation));
        candidates.into_iter().map(|(_, _, wall)| wall).collect()
    }

    /// First legal wall near the opponent, if any.
    fn find_blocking_wall(&self, board: &Board, player: PlayerId) -> Option<Wall> {
        self.wall_candidates(board.opponent(player), board.size())
            .into_iter()
            .find(|wall| is_wall_legal(wall, board))
    }

    /// The ordinary step leaving the shortest remaining path. Ties go to the
    /// earlier direction in [`RelativeDirection::PRIORITY`].
    fn best_step(&self, board: &Board, player: PlayerId) -> Option<(Direction, Cell)> {
        let me = board.pawn(player);
        let steps = step_destinations(me, board.opponent(player), board.walls());

        let mut best: Option<(Direction, Cell, u32)> = None;
        for relative in RelativeDirection::PRIORITY {
            let dir = relative.resolve(player);
            let Some(&(_, cell)) = steps.iter().find(|(d, _)| *d == dir) else {
                continue;
            };
            let Some(dist) = shortest_distance(cell, me.goal_row, board.walls()) else {
                continue;
            };
            if best.map_or(true, |(_, _, best_dist)| dist < best_dist) {
                best = Some((dir, cell, dist));
            }
        }
        best.map(|(dir, cell, _)| (dir, cell))
    }
}

impl ActionSelector for GreedyAgent {
    fn select_action(&mut self, game: &Match, player: PlayerId) -> AgentAction {
        let board = game.board();
        let me = board.pawn(player);
        let opponent = board.opponent(player);

        let opp_dist = shortest_distance(opponent.position, opponent.goal_row, board.walls());
        let in_range = opp_dist.map_or(false, |d| d <= self.config.wall_trigger_distance);

        // Short-circuits so the coin is only flipped when a wall is possible
        if me.walls_remaining > 0
            && in_range
            && self.rng.gen::<f64>() < self.config.wall_probability
        {
            if let Some(wall) = self.find_blocking_wall(board, player) {
                debug!("{player} blocks with {wall}, opponent was {opp_dist:?} from goal");
                return AgentAction::Wall(wall);
            }
            debug!("{player} found no legal wall near {}", opponent.position);
        }

        match self.best_step(board, player) {
            Some((dir, to)) => {
                debug!("{player} steps {dir:?} to {to}");
                AgentAction::Move {
                    from: me.position,
                    to,
                }
            }
            None => AgentAction::Pass,
        }
    }
}
