//! Evaluator for choosing tic-tac-toe moves with a linear value function.
//!
//! This crate implements a two-level evaluation architecture:
//!
//! 1. **Placement Evaluation** ([`placement_evaluator`]) - Scores the board that results from
//!    a single move as a weighted sum of board features.
//!
//! 2. **Turn Evaluation** ([`turn_evaluator`]) - Generates one candidate per empty cell, scores
//!    each with the placement evaluator and selects the best.
//!
//! # Architecture
//!
//! ```text
//! Turn Evaluation (select best cell)
//!     ↓ uses
//! Placement Evaluation (score one resulting board)
//!     ↓ uses
//! Board Features (threat count, center occupancy)
//! ```
//!
//! The weights are plain values ([`placement_evaluator::Weights`]); adjusting them from
//! game outcomes is the job of the `oxo-training` crate.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Mark};
//! use oxo_evaluator::{placement_evaluator::Weights, turn_evaluator::TurnEvaluator};
//!
//! let board: Board = "OO./.X./...".parse().unwrap();
//! let weights = Weights::new(0.0, -1.0, 1.0);
//! let turn_evaluator = TurnEvaluator::new(&weights, Mark::X);
//!
//! // blocking O's pair removes the only threat
//! let best = turn_evaluator.select_best_turn(&board, &board.empty_indices()).unwrap();
//! assert_eq!(best.index, 2);
//! ```
//!
//! # Current Limitations
//!
//! - **One ply only**: the opponent's replies are not searched.
//! - **Two features**: the value function cannot see X's own threats or forks.

pub mod board_feature;
pub mod placement_evaluator;
pub mod turn_evaluator;
