//! Turn controller: owns the board and the match state, checks every action
//! against the rules before committing it, and tracks turns and the winner.

use std::collections::BTreeSet;

use log::{debug, info};
use serde::Deserialize;

use crate::agents::{ActionSelector, AgentAction};
use crate::board::{Board, Cell, Direction, Pawn, PlayerId, Wall, WallSet};
use crate::error::{ConfigError, RuleError};
use crate::grid::MAX_BOARD_SIZE;
use crate::movement;
use crate::validation::is_wall_legal;

/// Match setup options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Wall stock per player.
    pub max_walls: u8,
    /// Grid width and height.
    pub board_size: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_walls: 10,
            board_size: 9,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Ended,
}

/// How a finished match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    GoalReached,
    Forfeit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub turn: PlayerId,
    pub winner: Option<PlayerId>,
    pub phase: Phase,
    pub end_reason: Option<EndReason>,
}

impl MatchState {
    fn start() -> Self {
        Self {
            turn: PlayerId::Player1,
            winner: None,
            phase: Phase::InProgress,
            end_reason: None,
        }
    }
}

/// Result of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with `next_turn` to act.
    Continue { next_turn: PlayerId },
    /// The mover reached its goal row.
    Won { winner: PlayerId },
}

/// A single match: board, turn and win state, plus the committed actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    config: MatchConfig,
    board: Board,
    state: MatchState,
    history: Vec<(PlayerId, AgentAction)>,
}

impl Default for Match {
    fn default() -> Self {
        Self::start(MatchConfig::default())
    }
}

impl Match {
    /// Start a match. Player 1 moves first.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    fn start(config: MatchConfig) -> Self {
        info!(
            "Starting match on a {0}x{0} board with {1} walls per player",
            config.board_size, config.max_walls
        );
        Self {
            config,
            board: Board::new(config.board_size, config.max_walls),
            state: MatchState::start(),
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position with `turn` to act.
    ///
    /// The position is trusted; use it for analysis and tests.
    pub fn from_position(config: MatchConfig, board: Board, turn: PlayerId) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(ConfigError::BoardSize(board.size()));
        }
        let mut game = Self::start(config);
        game.board = board;
        game.state.turn = turn;
        Ok(game)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn turn(&self) -> PlayerId {
        self.state.turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Ended
    }

    pub fn pawn(&self, id: PlayerId) -> &Pawn {
        self.board.pawn(id)
    }

    pub fn position(&self, id: PlayerId) -> Cell {
        self.board.pawn(id).position
    }

    pub fn walls(&self) -> &WallSet {
        self.board.walls()
    }

    pub fn walls_remaining(&self, id: PlayerId) -> u8 {
        self.board.pawn(id).walls_remaining
    }

    /// Committed actions in order. Forfeits are recorded in the state only.
    pub fn history(&self) -> &[(PlayerId, AgentAction)] {
        &self.history
    }

    /// Cells `id` may move to, whether or not it is that player's turn.
    pub fn legal_destinations(&self, id: PlayerId) -> BTreeSet<Cell> {
        movement::legal_destinations(self.board.pawn(id), self.board.opponent(id), self.board.walls())
    }

    /// Ordinary one-cell steps available to `id`.
    pub fn step_destinations(&self, id: PlayerId) -> Vec<(Direction, Cell)> {
        movement::step_destinations(self.board.pawn(id), self.board.opponent(id), self.board.walls())
    }

    /// Whether `candidate` could be placed now. Ignores turn and wall stock.
    pub fn is_wall_legal(&self, candidate: &Wall) -> bool {
        is_wall_legal(candidate, &self.board)
    }

    fn ensure_can_act(&self, id: PlayerId) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if id != self.state.turn {
            return Err(RuleError::NotYourTurn);
        }
        Ok(())
    }

    fn end(&mut self, winner: PlayerId, reason: EndReason) {
        self.state.phase = Phase::Ended;
        self.state.winner = Some(winner);
        self.state.end_reason = Some(reason);
        info!("{winner} wins ({reason:?})");
    }

    fn switch_turn(&mut self) {
        self.state.turn = self.state.turn.other();
    }

    /// Move `id` to `target`, then end the match if it reached its goal row
    /// or hand the turn to the opponent.
    pub fn try_move(&mut self, id: PlayerId, target: Cell) -> Result<MoveOutcome, RuleError> {
        self.ensure_can_act(id)?;

        if !self.legal_destinations(id).contains(&target) {
            debug!("{id} cannot move to {target}");
            return Err(RuleError::IllegalMove);
        }

        let from = self.board.pawn(id).position;
        self.board.apply_move(id, target);
        self.history.push((id, AgentAction::Move { from, to: target }));
        info!("{id} moves {from} -> {target}");

        if self.board.pawn(id).has_reached_goal() {
            self.end(id, EndReason::GoalReached);
            return Ok(MoveOutcome::Won { winner: id });
        }

        self.switch_turn();
        Ok(MoveOutcome::Continue {
            next_turn: self.state.turn,
        })
    }

    /// Move `id` one step in `dir`, jumping straight over an adjacent
    /// opponent. Diagonal jumps need [`Match::try_move`] with a target.
    pub fn try_step(&mut self, id: PlayerId, dir: Direction) -> Result<MoveOutcome, RuleError> {
        self.ensure_can_act(id)?;
        let target = movement::resolve_direction(
            self.board.pawn(id),
            self.board.opponent(id),
            self.board.walls(),
            dir,
        )
        .ok_or(RuleError::IllegalMove)?;
        self.try_move(id, target)
    }

    /// Place `wall` for `id`, spending one wall from its stock.
    pub fn try_wall(&mut self, id: PlayerId, wall: Wall) -> Result<(), RuleError> {
        self.ensure_can_act(id)?;

        if self.board.pawn(id).walls_remaining == 0 {
            return Err(RuleError::NoWallsRemaining);
        }

        if !is_wall_legal(&wall, &self.board) {
            debug!("{id} cannot place wall {wall}");
            return Err(RuleError::IllegalWall);
        }

        self.board.spend_wall(id);
        self.board.apply_wall(wall);
        self.history.push((id, AgentAction::Wall(wall)));
        info!(
            "{id} places wall {wall} ({} left)",
            self.board.pawn(id).walls_remaining
        );

        self.switch_turn();
        Ok(())
    }

    /// Give up the turn without acting. Only allowed when `id` has no legal
    /// destination at all.
    pub fn pass_turn(&mut self, id: PlayerId) -> Result<(), RuleError> {
        self.ensure_can_act(id)?;
        if !self.legal_destinations(id).is_empty() {
            debug!("{id} cannot pass with a legal move available");
            return Err(RuleError::IllegalMove);
        }
        self.commit_pass(id);
        Ok(())
    }

    /// Agent fallback: pass when no ordinary step exists, even if a jump does.
    fn agent_pass(&mut self, id: PlayerId) -> Result<(), RuleError> {
        if !self.step_destinations(id).is_empty() {
            debug!("{id} cannot pass with an ordinary step available");
            return Err(RuleError::IllegalMove);
        }
        self.commit_pass(id);
        Ok(())
    }

    fn commit_pass(&mut self, id: PlayerId) {
        self.history.push((id, AgentAction::Pass));
        info!("{id} passes");
        self.switch_turn();
    }

    /// Concede the match, e.g. when `id` runs out of clock time.
    ///
    /// Allowed at any point before the match ends. Returns the winner.
    pub fn forfeit(&mut self, id: PlayerId) -> Result<PlayerId, RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        let winner = id.other();
        self.end(winner, EndReason::Forfeit);
        Ok(winner)
    }

    /// Let `agent` decide and play `id`'s turn. Returns what was played.
    pub fn agent_take_turn(
        &mut self,
        id: PlayerId,
        agent: &mut dyn ActionSelector,
    ) -> Result<AgentAction, RuleError> {
        self.ensure_can_act(id)?;
        let action = agent.select_action(self, id);
        match action {
            AgentAction::Move { to, .. } => {
                self.try_move(id, to)?;
            }
            AgentAction::Wall(wall) => self.try_wall(id, wall)?,
            AgentAction::Pass => self.agent_pass(id)?,
        }
        Ok(action)
    }
}
