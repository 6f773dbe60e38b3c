//! Per-player countdown clocks.

use crate::board::Player;

/// Countdown clocks for both players, in fractional seconds. Charging time is
/// a pure data decrement; there is no background task to cancel.
#[derive(Debug, Clone)]
pub struct GameClock {
    remaining: [f64; 2],
}

impl GameClock {
    /// Create a clock giving each player `limit_minutes` minutes.
    pub fn new(limit_minutes: u32) -> Self {
        let seconds = f64::from(limit_minutes) * 60.0;
        Self {
            remaining: [seconds; 2],
        }
    }

    /// Seconds remaining on the given player's clock.
    pub fn remaining(&self, player: Player) -> f64 {
        self.remaining[index(player)]
    }

    /// Charge `delta` seconds to the given player's clock. Returns true when
    /// that clock has run out.
    pub fn charge(&mut self, player: Player, delta: f64) -> bool {
        let remaining = &mut self.remaining[index(player)];
        *remaining -= delta;
        *remaining <= 0.0
    }

    /// The given player's remaining time as zero-padded `MM:SS`, with
    /// fractional seconds truncated.
    pub fn display(&self, player: Player) -> String {
        format_mmss(self.remaining(player))
    }
}

fn index(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

/// Format a second count as zero-padded `MM:SS`. Negative values display as
/// `00:00`.
pub(super) fn format_mmss(seconds: f64) -> String {
    let secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_mmss(0.0), "00:00");
        assert_eq!(format_mmss(59.0), "00:59");
        assert_eq!(format_mmss(60.0), "01:00");
        assert_eq!(format_mmss(605.0), "10:05");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_mmss(59.9), "00:59");
        assert_eq!(format_mmss(0.4), "00:00");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_mmss(-3.2), "00:00");
    }

    #[test]
    fn charges_only_the_named_player() {
        let mut clock = GameClock::new(1);
        assert!(!clock.charge(Player::One, 30.0));
        assert_eq!(clock.remaining(Player::One), 30.0);
        assert_eq!(clock.remaining(Player::Two), 60.0);
    }

    #[test]
    fn expires_at_or_below_zero() {
        let mut clock = GameClock::new(1);
        assert!(!clock.charge(Player::Two, 59.5));
        assert!(clock.charge(Player::Two, 0.5));
        let mut clock = GameClock::new(1);
        assert!(clock.charge(Player::One, 75.0));
    }
}
