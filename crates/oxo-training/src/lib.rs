//! Online learning for the tic-tac-toe AI.
//!
//! The AI keeps three weights for the linear value function of `oxo-evaluator` and nudges
//! them after every move it makes, using the result observed on the board that move produced.
//!
//! # How Learning Works
//!
//! 1. **Predict** - When choosing a move, the AI records the chosen board and its score
//! 2. **Observe** - On its next turn, the AI scores that same board again: a finished game
//!    gets a fixed score (win, loss, draw), an unfinished one gets the current estimate
//! 3. **Correct** - Each weight moves in proportion to itself and to the prediction error
//!
//! See [`learner`] for the exact rule.
//!
//! # Architecture
//!
//! ```text
//! AiPlayer (oxo_engine::Player)
//!     ↓ owns
//! Learner (weights + last prediction)
//!     ↓ feeds weights to
//! TurnEvaluator (oxo-evaluator)
//! ```
//!
//! The learner state is an ordinary value owned by one [`player::AiPlayer`]. Weights live as
//! long as that player does and are never saved or loaded.
//!
//! # Self-Play
//!
//! [`self_play::SelfPlay`] pits the AI against a seeded [`player::RandomPlayer`] for many
//! games in a row, which is the quickest way to watch the weights evolve.
//!
//! # Example
//!
//! ```
//! use oxo_training::self_play::SelfPlay;
//!
//! let mut self_play = SelfPlay::new(7);
//! let summaries = self_play.play_games(5, |_| {}).unwrap();
//! assert_eq!(summaries.len(), 5);
//! assert_eq!(self_play.stats().games(), 5);
//! ```
//!
//! # Current Limitations
//!
//! - **Bootstrapped target**: for unfinished games the target is the model's own estimate,
//!   so only moves that end the game change the weights.
//! - **Unbounded weights**: the multiplicative update can grow or flip the weights without
//!   limit; only non-finite results are refused.
//! - **Losses are invisible**: the AI only ever learns from boards produced by its own moves,
//!   which never show an O win.

pub mod learner;
pub mod player;
pub mod self_play;
