//! Rule engine for a two-player Quoridor-style race on a square grid, plus a
//! one-ply greedy computer opponent.
//!
//! [`Match`] is the single authority over game state: it validates every move
//! and wall against the board, keeps both players connected to their goal
//! rows, and tracks turns and the winner. Front ends only send intents and
//! read state back.

pub mod agents;
pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod footprint;
pub mod game_runner;
pub mod game_state;
pub mod grid;
pub mod movement;
pub mod pathfinding;
pub mod validation;

pub use agents::{ActionSelector, AgentAction, AgentConfig, GreedyAgent, RandomAgent};
pub use board::{Board, Cell, Direction, Orientation, Pawn, PlayerId, RelativeDirection, Wall, WallSet};
pub use clock::TurnClock;
pub use config::{load_config, AppConfig, GameMode};
pub use error::{ConfigError, RuleError};
pub use game_state::{EndReason, Match, MatchConfig, MatchState, MoveOutcome, Phase};

/// Start a match with `max_walls` walls per player on a `board_size` grid.
pub fn new_match(max_walls: u8, board_size: u8) -> Result<Match, ConfigError> {
    Match::new(MatchConfig {
        max_walls,
        board_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_standard() {
        let game = new_match(10, 9).unwrap();
        assert_eq!(game.position(PlayerId::Player1), Cell::new(4, 0));
        assert_eq!(game.position(PlayerId::Player2), Cell::new(4, 8));
        assert_eq!(game.turn(), PlayerId::Player1);
        assert!(game.walls().is_empty());
    }

    #[test]
    fn test_new_match_rejects_bad_size() {
        assert_eq!(new_match(10, 0).unwrap_err(), ConfigError::BoardSize(0));
    }
}
