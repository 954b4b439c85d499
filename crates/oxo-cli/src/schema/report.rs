use chrono::{DateTime, Utc};
use oxo_engine::GameStats;
use oxo_evaluator::placement_evaluator::Weights;
use oxo_training::{learner::LearningParams, self_play::GameSummary};
use serde::{Deserialize, Serialize};

/// JSON report written by `oxo self-play`.
///
/// Diagnostic only: the weights in it are never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub played_at: DateTime<Utc>,
    pub seed: u64,
    pub games: usize,
    pub params: LearningParams,
    pub stats: GameStats,
    pub final_weights: Weights,
    pub iteration: usize,
    /// `false` once any weight stopped being a finite number.
    pub weights_finite: bool,
    pub summaries: Vec<GameSummary>,
}
