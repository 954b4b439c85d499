//! Repeated games between the learning AI (X) and a random opponent (O).
//!
//! The same [`AiPlayer`] is kept across games, so its weights and last-move memory carry over
//! from one game to the next exactly as they do in an interactive session. A game the AI wins
//! is learned from at the start of the following game.

use oxo_engine::{GameRecord, GameStats, Mark, Match, MatchError, Player as _};
use oxo_evaluator::placement_evaluator::Weights;
use serde::{Deserialize, Serialize};

use crate::player::{AiPlayer, RandomPlayer};

/// Result of one self-play game and the learner state after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game number, starting at 0.
    pub game: usize,
    pub record: GameRecord,
    pub weights: Weights,
    pub iteration: usize,
}

#[derive(Debug, Clone)]
pub struct SelfPlay {
    ai: AiPlayer,
    opponent: RandomPlayer,
    stats: GameStats,
    games_played: usize,
}

impl SelfPlay {
    /// Creates a fresh AI against a random opponent seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_players(
            AiPlayer::new(Mark::X),
            RandomPlayer::with_seed(Mark::O, seed),
        )
    }

    /// # Panics
    ///
    /// Panics if `ai` does not play X.
    #[must_use]
    pub fn with_players(ai: AiPlayer, opponent: RandomPlayer) -> Self {
        assert_eq!(ai.mark(), Mark::X, "the AI must play X");
        Self {
            ai,
            opponent,
            stats: GameStats::new(),
            games_played: 0,
        }
    }

    #[must_use]
    pub fn ai(&self) -> &AiPlayer {
        &self.ai
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Plays one full game.
    pub fn play_game(&mut self) -> Result<GameSummary, MatchError> {
        let record = Match::new(&mut self.ai, &mut self.opponent).play()?;
        self.stats.record(record.outcome);
        let learner = self.ai.learner();
        let summary = GameSummary {
            game: self.games_played,
            record,
            weights: *learner.weights(),
            iteration: learner.iteration(),
        };
        self.games_played += 1;
        tracing::debug!(
            game = summary.game,
            outcome = ?summary.record.outcome,
            weights = %summary.weights,
            "self-play game finished"
        );
        Ok(summary)
    }

    /// Plays `games` games, calling `on_game` after each one.
    pub fn play_games<F>(
        &mut self,
        games: usize,
        mut on_game: F,
    ) -> Result<Vec<GameSummary>, MatchError>
    where
        F: FnMut(&GameSummary),
    {
        let mut summaries = Vec::with_capacity(games);
        for _ in 0..games {
            let summary = self.play_game()?;
            on_game(&summary);
            summaries.push(summary);
        }
        Ok(summaries)
    }
}
