//! Configuration for matches and the command-line front end.
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! standard 9×9 game. Unknown keys are silently ignored.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::agents::AgentConfig;
use crate::error::ConfigError;
use crate::game_state::MatchConfig;

/// Who sits in each seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans at one terminal.
    #[default]
    Pvp,
    /// Human as Player 1 against the greedy agent.
    Pve,
    /// Agent against agent.
    Auto,
}

/// Top-level config file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub quoridor: QuoridorConfig,
    pub agent: AgentConfig,
    pub clock: ClockConfig,
    pub mode: GameMode,
}

/// Game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoridorConfig {
    pub board_size: u8,
    pub max_walls: u8,
    /// Turn cap for agent-driven matches.
    pub max_steps: usize,
}

impl Default for QuoridorConfig {
    fn default() -> Self {
        let base = MatchConfig::default();
        Self {
            board_size: base.board_size,
            max_walls: base.max_walls,
            max_steps: 400,
        }
    }
}

impl QuoridorConfig {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_walls: self.max_walls,
            board_size: self.board_size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub seconds_per_player: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            seconds_per_player: 300,
        }
    }
}

impl ClockConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds_per_player)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quoridor.match_config().validate()?;
        self.agent.validate()?;
        if self.clock.seconds_per_player == 0 {
            return Err(ConfigError::ZeroClock);
        }
        Ok(())
    }
}

/// Load and validate an `AppConfig` from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(yaml.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_full_config() {
        let f = write_yaml(
            r#"
quoridor:
  board_size: 5
  max_walls: 3
  max_steps: 50
agent:
  wall_probability: 0.25
  wall_trigger_distance: 2
  search_radius: 2
  seed: 42
clock:
  seconds_per_player: 90
mode: auto
"#,
        );
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.quoridor.board_size, 5);
        assert_eq!(config.quoridor.max_walls, 3);
        assert_eq!(config.quoridor.max_steps, 50);
        assert_eq!(config.agent.wall_probability, 0.25);
        assert_eq!(config.agent.wall_trigger_distance, 2);
        assert_eq!(config.agent.search_radius, 2);
        assert_eq!(config.agent.seed, Some(42));
        assert_eq!(config.clock.duration(), Duration::from_secs(90));
        assert_eq!(config.mode, GameMode::Auto);
    }

    #[test]
    fn test_load_minimal_config() {
        let f = write_yaml(
            r#"
quoridor:
  board_size: 7
"#,
        );
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.quoridor.board_size, 7);
        assert_eq!(config.quoridor.max_walls, 10);
        assert_eq!(config.quoridor.max_steps, 400);
        assert_eq!(config.agent, AgentConfig::default());
        assert_eq!(config.clock.seconds_per_player, 300);
        assert_eq!(config.mode, GameMode::Pvp);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let f = write_yaml(
            r#"
run_id: local
quoridor:
  board_size: 9
  max_walls: 10
  max_steps: 200
display:
  theme: dark
"#,
        );
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.quoridor.match_config(), MatchConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let f = write_yaml(
            r#"
quoridor:
  board_size: 15
"#,
        );
        assert!(load_config(f.path()).is_err());

        let f = write_yaml(
            r#"
clock:
  seconds_per_player: 0
"#,
        );
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        config.agent.wall_probability = -0.1;
        assert_eq!(config.validate(), Err(ConfigError::WallProbability(-0.1)));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config("/nonexistent/quoridor.yaml").is_err());
    }
}
