//! Per-player time banks.
//!
//! The engine has no notion of time. An adapter measures how long the side to
//! move took, charges it here, and calls
//! [`Match::forfeit`](crate::game_state::Match::forfeit) when a bank runs dry.

use std::time::Duration;

use crate::board::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnClock {
    remaining: [Duration; 2],
}

impl TurnClock {
    pub fn new(per_player: Duration) -> Self {
        Self {
            remaining: [per_player; 2],
        }
    }

    pub fn remaining(&self, player: PlayerId) -> Duration {
        self.remaining[player.index()]
    }

    pub fn is_flagged(&self, player: PlayerId) -> bool {
        self.remaining[player.index()].is_zero()
    }

    /// Deduct `elapsed` from `player`'s bank. Returns `Some(player)` once the
    /// bank is empty.
    pub fn charge(&mut self, player: PlayerId, elapsed: Duration) -> Option<PlayerId> {
        let bank = &mut self.remaining[player.index()];
        *bank = bank.saturating_sub(elapsed);
        bank.is_zero().then_some(player)
    }

    /// Remaining time as `MM:SS`, rounded down to whole seconds.
    pub fn format_remaining(&self, player: PlayerId) -> String {
        let secs = self.remaining(player).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_and_flag() {
        let mut clock = TurnClock::new(Duration::from_secs(10));
        assert_eq!(clock.charge(PlayerId::Player1, Duration::from_secs(4)), None);
        assert_eq!(clock.remaining(PlayerId::Player1), Duration::from_secs(6));
        assert_eq!(clock.remaining(PlayerId::Player2), Duration::from_secs(10));

        assert_eq!(
            clock.charge(PlayerId::Player1, Duration::from_secs(30)),
            Some(PlayerId::Player1)
        );
        assert!(clock.is_flagged(PlayerId::Player1));
        assert!(!clock.is_flagged(PlayerId::Player2));
    }

    #[test]
    fn test_format_remaining() {
        let mut clock = TurnClock::new(Duration::from_secs(300));
        assert_eq!(clock.format_remaining(PlayerId::Player2), "05:00");
        clock.charge(PlayerId::Player2, Duration::from_millis(61_500));
        assert_eq!(clock.format_remaining(PlayerId::Player2), "03:58");
    }
}
