/// Reasons the turn controller rejects an action.
///
/// Every variant is an expected, recoverable condition. A rejected action
/// leaves the match untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("destination is not a legal move")]
    IllegalMove,

    #[error("wall overlaps another piece, leaves the board, or cuts a player off from its goal")]
    IllegalWall,

    #[error("no walls remaining")]
    NoWallsRemaining,

    #[error("the match is already over")]
    GameOver,
}

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is outside the supported range 3..=11")]
    BoardSize(u8),

    #[error("wall probability {0} must be within [0, 1]")]
    WallProbability(f64),

    #[error("search radius {0} must be at most 3")]
    SearchRadius(u8),

    #[error("clock must give each player at least one second")]
    ZeroClock,
}
