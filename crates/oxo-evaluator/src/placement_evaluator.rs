//! Placement evaluation: scoring the board that results from a move.
//!
//! # Linear Value Function
//!
//! [`Weights`] scores a board from its [`BoardFeatures`] as
//!
//! ```text
//! value = w0 + w1·x1 + w2·x2
//! ```
//!
//! where `x1` is the opponent threat count, `x2` the center occupancy, `w0` a bias term and
//! higher values are better for X.
//!
//! The weights start at `w0 = 1, w1 = 1, w2 = 0` ([`Weights::INITIAL`]) and are adjusted
//! online by the learner in `oxo-training`.

use std::fmt;

use oxo_engine::Board;
use serde::{Deserialize, Serialize};

use crate::board_feature::BoardFeatures;

/// Scores the board resulting from a move (higher is better for X).
pub trait PlacementEvaluator: fmt::Debug {
    fn evaluate_placement(&self, board: &Board) -> f64;
}

/// Coefficients of the linear value function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// `w0`
    pub bias: f64,
    /// `w1`, scales [`BoardFeatures::threats`]
    pub threat: f64,
    /// `w2`, scales [`BoardFeatures::center`]
    pub center: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w0 = {}, w1 = {}, w2 = {}",
            self.bias, self.threat, self.center
        )
    }
}

impl Weights {
    pub const INITIAL: Self = Self {
        bias: 1.0,
        threat: 1.0,
        center: 0.0,
    };

    #[must_use]
    pub const fn new(bias: f64, threat: f64, center: f64) -> Self {
        Self {
            bias,
            threat,
            center,
        }
    }

    /// Returns `[w0, w1, w2]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.bias, self.threat, self.center]
    }

    #[must_use]
    pub const fn from_array([bias, threat, center]: [f64; 3]) -> Self {
        Self::new(bias, threat, center)
    }

    /// Applies `f` to every weight, bias included.
    #[must_use]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::from_array(self.to_array().map(f))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|w| w.is_finite())
    }

    /// Computes `w0 + w1·x1 + w2·x2`.
    ///
    /// ```
    /// use oxo_evaluator::placement_evaluator::Weights;
    ///
    /// assert_eq!(Weights::INITIAL.value(2, -1), 3.0);
    /// ```
    #[must_use]
    pub fn value(&self, threats: i32, center: i32) -> f64 {
        self.bias + self.threat * f64::from(threats) + self.center * f64::from(center)
    }

    #[must_use]
    pub fn evaluate_features(&self, features: BoardFeatures) -> f64 {
        self.value(features.threats, features.center)
    }
}

impl PlacementEvaluator for Weights {
    #[inline]
    fn evaluate_placement(&self, board: &Board) -> f64 {
        self.evaluate_features(BoardFeatures::extract(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_linear() {
        // (weights, x1, x2, expected)
        let test_cases = [
            (Weights::INITIAL, 2, -1, 3.0),
            (Weights::INITIAL, 0, 1, 1.0),
            (Weights::new(0.5, -2.0, 4.0), 1, 1, 2.5),
            (Weights::new(0.5, -2.0, 4.0), 3, -1, -9.5),
            (Weights::new(0.0, 0.0, 0.0), 5, 1, 0.0),
        ];
        for (weights, x1, x2, expected) in test_cases {
            assert_eq!(weights.value(x1, x2), expected, "{weights} at ({x1}, {x2})");
        }
    }

    #[test]
    fn test_evaluate_placement_uses_features() {
        let board: Board = "OO./.X./...".parse().unwrap();
        let weights = Weights::new(1.0, -3.0, 2.0);
        // x1 = 1, x2 = 1
        assert_eq!(weights.evaluate_placement(&board), 0.0);
    }

    #[test]
    fn test_map_and_finiteness() {
        let doubled = Weights::INITIAL.map(|w| w * 2.0);
        assert_eq!(doubled, Weights::new(2.0, 2.0, 0.0));
        assert!(doubled.is_finite());
        assert!(!Weights::new(f64::INFINITY, 1.0, 0.0).is_finite());
        assert!(!Weights::new(1.0, f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Weights::INITIAL).unwrap();
        assert_eq!(json, r#"{"bias":1.0,"threat":1.0,"center":0.0}"#);
    }
}
