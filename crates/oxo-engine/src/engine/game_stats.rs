use serde::{Deserialize, Serialize};

use crate::core::{Mark, Outcome};

/// Tally of finished games.
///
/// ```
/// use oxo_engine::{GameStats, Mark, Outcome};
///
/// let mut stats = GameStats::new();
/// stats.record(Outcome::Won(Mark::X));
/// stats.record(Outcome::Draw);
///
/// assert_eq!(stats.games(), 2);
/// assert_eq!(stats.wins(Mark::X), 1);
/// assert_eq!(stats.draws(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    /// Counts a finished game. In-progress outcomes are ignored.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub const fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut stats = GameStats::new();
        stats.record(Outcome::InProgress);
        assert_eq!(stats, GameStats::default());
        stats.record(Outcome::Won(Mark::O));
        assert_eq!(stats.wins(Mark::O), 1);
        assert_eq!(stats.wins(Mark::X), 0);
        assert_eq!(stats.games(), 1);
    }
}
