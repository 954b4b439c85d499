//! Online weight adjustment from observed game results.
//!
//! # Update Rule
//!
//! After every AI move, the score the AI predicted for its chosen board is compared with the
//! "actual" score of that board:
//!
//! | Observed board | Actual score              |
//! |----------------|---------------------------|
//! | X has won      | `+100`                    |
//! | O has won      | `-100`                    |
//! | Draw           | `0`                       |
//! | In progress    | current value function    |
//!
//! With `diff = predicted - actual`, every weight (bias included) moves by
//!
//! ```text
//! w ← w + rate · diff · w
//! ```
//!
//! with `rate = 0.1`. The step is proportional to the weight itself, so a weight that is
//! zero stays zero.
//!
//! For boards still in progress the target is the value function's own output, so the error
//! is zero unless the weights changed since the prediction was made. In practice the weights
//! only move when the AI's move ended the game.
//!
//! # Numeric Guard
//!
//! Nothing bounds the weights and repeated large errors can make them grow geometrically. An
//! update that would produce a non-finite weight is discarded and logged; finite weights are
//! never clamped.

use oxo_engine::{Board, Mark, Outcome};
use oxo_evaluator::{
    placement_evaluator::{PlacementEvaluator as _, Weights},
    turn_evaluator::Candidate,
};
use serde::{Deserialize, Serialize};

/// Constants of the learning rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningParams {
    pub learning_rate: f64,
    pub win_score: f64,
    pub loss_score: f64,
    pub draw_score: f64,
    pub initial_weights: Weights,
}

impl Default for LearningParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            win_score: 100.0,
            loss_score: -100.0,
            draw_score: 0.0,
            initial_weights: Weights::INITIAL,
        }
    }
}

/// Board and score of the AI's most recent choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub board: Board,
    pub score: f64,
}

impl From<Candidate> for Prediction {
    fn from(candidate: Candidate) -> Self {
        Self {
            board: candidate.board,
            score: candidate.score,
        }
    }
}

/// What a single learning step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LearnOutcome {
    /// No move has been predicted yet.
    NoPrediction,
    /// The prediction matched the actual score.
    Unchanged,
    /// The weights were moved by `diff`.
    Updated { diff: f64 },
    /// The update would have produced a non-finite weight and was discarded.
    Rejected { diff: f64 },
}

/// Weights and last-move memory of the learning AI.
///
/// Owned by one AI player; construct a new one to start from [`LearningParams::initial_weights`]
/// again.
#[derive(Debug, Clone)]
pub struct Learner {
    params: LearningParams,
    weights: Weights,
    last_prediction: Option<Prediction>,
    iteration: usize,
}

impl Default for Learner {
    fn default() -> Self {
        Self::new()
    }
}

impl Learner {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(LearningParams::default())
    }

    #[must_use]
    pub fn with_params(params: LearningParams) -> Self {
        Self {
            params,
            weights: params.initial_weights,
            last_prediction: None,
            iteration: 0,
        }
    }

    #[must_use]
    pub fn params(&self) -> &LearningParams {
        &self.params
    }

    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Number of learning steps taken, including those without a prediction.
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    #[must_use]
    pub fn last_prediction(&self) -> Option<&Prediction> {
        self.last_prediction.as_ref()
    }

    /// Remembers the AI's choice so the next learning step can check it.
    pub fn record_prediction<P>(&mut self, prediction: P)
    where
        P: Into<Prediction>,
    {
        self.last_prediction = Some(prediction.into());
    }

    /// Scores `board` as the learning target: terminal results are fixed, boards still in
    /// progress are re-evaluated with the current weights.
    #[must_use]
    pub fn actual_score(&self, board: &Board) -> f64 {
        match board.outcome() {
            Outcome::Won(Mark::X) => self.params.win_score,
            Outcome::Won(Mark::O) => self.params.loss_score,
            Outcome::Draw => self.params.draw_score,
            Outcome::InProgress => self.weights.evaluate_placement(board),
        }
    }

    /// Compares the last prediction with the actual score of `observed` and adjusts the weights.
    ///
    /// The prediction is consumed, so each one moves the weights at most once.
    pub fn learn(&mut self, observed: &Board) -> LearnOutcome {
        self.iteration += 1;
        let Some(prediction) = self.last_prediction.take() else {
            tracing::debug!(iteration = self.iteration, "no prediction to learn from");
            return LearnOutcome::NoPrediction;
        };
        let actual = self.actual_score(observed);
        let outcome = self.apply_error(prediction.score, actual);
        match outcome {
            LearnOutcome::Updated { diff } => tracing::info!(
                iteration = self.iteration,
                diff,
                w0 = self.weights.bias,
                w1 = self.weights.threat,
                w2 = self.weights.center,
                "weights updated"
            ),
            LearnOutcome::Rejected { diff } => tracing::warn!(
                iteration = self.iteration,
                diff,
                weights = %self.weights,
                "update would make weights non-finite; keeping previous weights"
            ),
            LearnOutcome::NoPrediction | LearnOutcome::Unchanged => tracing::debug!(
                iteration = self.iteration,
                weights = %self.weights,
                "prediction matched"
            ),
        }
        outcome
    }

    /// Learns from the board produced by the AI's previous move, if there was one.
    pub fn learn_from_last_move(&mut self) -> LearnOutcome {
        let observed = self
            .last_prediction
            .map_or(Board::EMPTY, |prediction| prediction.board);
        self.learn(&observed)
    }

    /// Applies `w ← w + rate · (predicted - actual) · w` to every weight.
    pub fn apply_error(&mut self, predicted: f64, actual: f64) -> LearnOutcome {
        let diff = predicted - actual;
        if diff == 0.0 {
            return LearnOutcome::Unchanged;
        }
        let rate = self.params.learning_rate;
        let next = self.weights.map(|w| w + rate * diff * w);
        if !next.is_finite() {
            return LearnOutcome::Rejected { diff };
        }
        self.weights = next;
        LearnOutcome::Updated { diff }
    }
}
