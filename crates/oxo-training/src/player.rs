//! Players that can sit at the board without a human.
//!
//! - [`AiPlayer`] - The learning opponent: learns from its previous move, then picks the
//!   best-scoring cell
//! - [`RandomPlayer`] - Picks a uniformly random empty cell from a seeded generator

use oxo_engine::{Board, Mark, Player, PlayerError};
use oxo_evaluator::turn_evaluator::{Candidate, ChooseMoveError, TurnEvaluator};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

use crate::learner::Learner;

/// The learning AI.
///
/// Every call to [`select_move`](Self::select_move):
///
/// 1. Runs one learning step on the board produced by the previous call
/// 2. Scores one candidate per given empty cell with the current weights
/// 3. Picks the first strictly best candidate and remembers its board and score
/// 4. Returns the chosen cell
///
/// ```
/// use oxo_engine::{Board, Mark};
/// use oxo_training::player::AiPlayer;
///
/// let mut ai = AiPlayer::new(Mark::X);
/// // all cells tie under the initial weights, so the first one wins
/// assert_eq!(ai.select_move(&Board::EMPTY, &Board::EMPTY.empty_indices()), Ok(0));
/// ```
#[derive(Debug, Clone)]
pub struct AiPlayer {
    mark: Mark,
    learner: Learner,
}

impl AiPlayer {
    #[must_use]
    pub fn new(mark: Mark) -> Self {
        Self::with_learner(mark, Learner::new())
    }

    #[must_use]
    pub fn with_learner(mark: Mark, learner: Learner) -> Self {
        Self { mark, learner }
    }

    #[must_use]
    pub fn learner(&self) -> &Learner {
        &self.learner
    }

    /// Learns from the previous move, then chooses a cell among `empty_indices`.
    ///
    /// Fails with [`ChooseMoveError::NoEmptyCell`] when `empty_indices` is empty, or with
    /// [`ChooseMoveError::InvalidIndex`] for a taken or out-of-range cell. The learning step has
    /// run by then and used up the previous prediction; no new one is recorded.
    pub fn select_move(
        &mut self,
        board: &Board,
        empty_indices: &[usize],
    ) -> Result<usize, ChooseMoveError> {
        self.learner.learn_from_last_move();
        let candidate = self.best_candidate(board, empty_indices)?;
        self.learner.record_prediction(candidate);
        Ok(candidate.index)
    }

    /// Scores the candidates with the current weights without learning or recording anything.
    pub fn best_candidate(
        &self,
        board: &Board,
        empty_indices: &[usize],
    ) -> Result<Candidate, ChooseMoveError> {
        TurnEvaluator::new(self.learner.weights(), self.mark).select_best_turn(board, empty_indices)
    }
}

impl Player for AiPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        Ok(self.select_move(board, &board.empty_indices())?)
    }
}

/// Plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    mark: Mark,
    rng: Pcg32,
}

impl RandomPlayer {
    #[must_use]
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        board
            .empty_indices()
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayerError::NoEmptyCell)
    }
}
