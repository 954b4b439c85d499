//! Board features used by the value function.
//!
//! Each feature reduces a board to a small signed integer:
//!
//! - [`OpponentThreats`] (`x1`) - Lines where O could win on its next move
//! - [`CenterOccupancy`] (`x2`) - Whether X holds the center cell
//!
//! Features are pure functions of the board. [`BoardFeatures::extract`] computes both at once.
//!
//! # Fixed marks
//!
//! Both features look at literal marks, not at "the AI's mark": threats always count O pairs
//! and center occupancy always checks for X. An evaluator playing O still sees the board from
//! X's point of view.

use std::fmt;

use oxo_engine::{Board, Line, Mark};
use serde::{Deserialize, Serialize};

/// Extracts one raw feature value from a board.
pub trait BoardFeatureSource: fmt::Debug + Send + Sync {
    /// Stable identifier, used in logs and reports.
    #[must_use]
    fn id(&self) -> &str;
    /// Human-readable name.
    #[must_use]
    fn name(&self) -> &str;
    #[must_use]
    fn extract_raw(&self, board: &Board) -> i32;
}

/// Every feature, in weight order (`x1`, `x2`).
pub const ALL_BOARD_FEATURES: [&dyn BoardFeatureSource; 2] = [&OpponentThreats, &CenterOccupancy];

/// Number of lines holding two O marks and one empty cell.
///
/// Each such line is a cell where O wins on its next move, so a larger value is worse for X.
///
/// # Raw measurement
///
/// - Range: 0–8 (in reachable positions at most a handful)
/// - Counted per line, so one empty cell finishing two lines counts twice
#[derive(Debug, Clone, Copy)]
pub struct OpponentThreats;

impl OpponentThreats {
    const THREAT_MARK: Mark = Mark::O;
}

impl BoardFeatureSource for OpponentThreats {
    fn id(&self) -> &str {
        "opponent_threats"
    }

    fn name(&self) -> &str {
        "Opponent Threats"
    }

    fn extract_raw(&self, board: &Board) -> i32 {
        let count = Line::ALL
            .into_iter()
            .filter(|line| line.count(board, Self::THREAT_MARK) == (2, 1))
            .count();
        // at most Line::ALL.len()
        i32::try_from(count).unwrap_or(i32::MAX)
    }
}

/// `+1` when X holds the center cell, `-1` otherwise.
///
/// An empty center and an O center both give `-1`.
#[derive(Debug, Clone, Copy)]
pub struct CenterOccupancy;

impl BoardFeatureSource for CenterOccupancy {
    fn id(&self) -> &str {
        "center_occupancy"
    }

    fn name(&self) -> &str {
        "Center Occupancy"
    }

    fn extract_raw(&self, board: &Board) -> i32 {
        if board[Board::CENTER] == Some(Mark::X) {
            1
        } else {
            -1
        }
    }
}

/// Feature vector of a board.
///
/// ```
/// use oxo_engine::Board;
/// use oxo_evaluator::board_feature::BoardFeatures;
///
/// let board: Board = "OO./.X./...".parse().unwrap();
/// let features = BoardFeatures::extract(&board);
/// assert_eq!(features.threats, 1);
/// assert_eq!(features.center, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFeatures {
    /// `x1`: see [`OpponentThreats`].
    pub threats: i32,
    /// `x2`: see [`CenterOccupancy`].
    pub center: i32,
}

impl BoardFeatures {
    #[must_use]
    pub fn extract(board: &Board) -> Self {
        Self {
            threats: OpponentThreats.extract_raw(board),
            center: CenterOccupancy.extract_raw(board),
        }
    }

    /// Returns `[x1, x2]` in weight order.
    #[must_use]
    pub const fn to_array(self) -> [i32; 2] {
        [self.threats, self.center]
    }
}
