//! Core game loop for agent-driven matches.
//!
//! Both seats are abstracted behind the [`ActionSelector`] trait so the runner
//! can be tested with scripted or random agents. Every match owns its own
//! [`Match`], so many can run in parallel without shared state.

use anyhow::Context;
use log::info;
use rayon::prelude::*;

use crate::agents::{ActionSelector, AgentAction, AgentConfig, GreedyAgent};
use crate::board::PlayerId;
use crate::game_state::{Match, MatchConfig};

/// Result of a complete game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// `Some(player)` if that player won, `None` if truncated.
    pub winner: Option<PlayerId>,
    /// Total number of turns played.
    pub num_turns: usize,
    /// Every committed action, in order.
    pub actions: Vec<(PlayerId, AgentAction)>,
}

/// Play a complete game. `first` controls Player 1, which moves first.
///
/// Stops after `max_steps` turns with no winner if neither side has arrived.
pub fn play_game(
    first: &mut dyn ActionSelector,
    second: &mut dyn ActionSelector,
    config: MatchConfig,
    max_steps: usize,
) -> anyhow::Result<GameResult> {
    let mut game = Match::new(config).context("Invalid match configuration")?;

    for step in 0..max_steps {
        let player = game.turn();
        let agent: &mut dyn ActionSelector = match player {
            PlayerId::Player1 => &mut *first,
            PlayerId::Player2 => &mut *second,
        };
        game.agent_take_turn(player, agent)
            .with_context(|| format!("{player} chose an illegal action on turn {step}"))?;

        if let Some(winner) = game.winner() {
            return Ok(GameResult {
                winner: Some(winner),
                num_turns: step + 1,
                actions: game.history().to_vec(),
            });
        }
    }

    // Truncated
    Ok(GameResult {
        winner: None,
        num_turns: max_steps,
        actions: game.history().to_vec(),
    })
}

/// Aggregate of a batch of matches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSummary {
    pub games: usize,
    /// Wins indexed by [`PlayerId::index`].
    pub wins: [usize; 2],
    pub truncated: usize,
    pub average_turns: f64,
}

/// Play `games` independent greedy-vs-greedy matches in parallel.
///
/// Game `i` seeds its agents with `base_seed + 2i` and `base_seed + 2i + 1`,
/// so a series is reproducible regardless of scheduling.
pub fn play_greedy_series(
    games: usize,
    config: MatchConfig,
    agent_config: AgentConfig,
    max_steps: usize,
    base_seed: u64,
) -> anyhow::Result<SeriesSummary> {
    let results: Vec<GameResult> = (0..games)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(2 * i as u64);
            let mut first = GreedyAgent::new(AgentConfig {
                seed: Some(seed),
                ..agent_config
            });
            let mut second = GreedyAgent::new(AgentConfig {
                seed: Some(seed.wrapping_add(1)),
                ..agent_config
            });
            play_game(&mut first, &mut second, config, max_steps)
                .with_context(|| format!("Game {i} failed"))
        })
        .collect::<anyhow::Result<_>>()?;

    let mut summary = SeriesSummary {
        games,
        ..SeriesSummary::default()
    };
    let mut total_turns = 0;
    for result in &results {
        match result.winner {
            Some(winner) => summary.wins[winner.index()] += 1,
            None => summary.truncated += 1,
        }
        total_turns += result.num_turns;
    }
    if games > 0 {
        summary.average_turns = total_turns as f64 / games as f64;
    }
    info!(
        "Series of {games}: {} / {} wins, {} truncated",
        summary.wins[0], summary.wins[1], summary.truncated
    );
    Ok(summary)
}
