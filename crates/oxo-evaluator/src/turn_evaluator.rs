//! Turn evaluation: picking the AI's cell for the current turn.
//!
//! # How It Works
//!
//! 1. **Generate Candidates** - For each given empty cell, copy the board and place the AI's
//!    mark there
//! 2. **Score Each Candidate** - Use a [`PlacementEvaluator`] on the resulting board
//! 3. **Select Best** - Scan the candidates in order and keep the first one whose score is
//!    strictly greater than every earlier score
//!
//! # Design: Greedy One-Ply Lookahead
//!
//! Only the board right after the AI's own move is scored; the opponent's replies are never
//! expanded. Ties go to the earliest candidate, so with the cells given in ascending order the
//! lowest-indexed best cell wins.
//!
//! # Usage
//!
//! ```
//! use oxo_engine::{Board, Mark};
//! use oxo_evaluator::{placement_evaluator::Weights, turn_evaluator::TurnEvaluator};
//!
//! let weights = Weights::new(1.0, 1.0, 1.0);
//! let turn_evaluator = TurnEvaluator::new(&weights, Mark::X);
//!
//! let board = Board::EMPTY;
//! let best = turn_evaluator
//!     .select_best_turn(&board, &board.empty_indices())
//!     .unwrap();
//! assert_eq!(best.index, 4);
//! assert_eq!(best.score, 2.0);
//! ```

use arrayvec::ArrayVec;
use oxo_engine::{Board, Mark, PlaceError, PlayerError};

use crate::placement_evaluator::PlacementEvaluator;

/// Error returned when no move can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ChooseMoveError {
    #[display("no empty cell available")]
    NoEmptyCell,
    #[display("invalid candidate cell: {_0}")]
    InvalidIndex(PlaceError),
}

impl From<ChooseMoveError> for PlayerError {
    fn from(err: ChooseMoveError) -> Self {
        match err {
            ChooseMoveError::NoEmptyCell => PlayerError::NoEmptyCell,
            ChooseMoveError::InvalidIndex(err) => PlayerError::InvalidMove(err),
        }
    }
}

/// A hypothetical next board with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Board after placing the mark.
    pub board: Board,
    pub score: f64,
    /// Cell the mark was placed on.
    pub index: usize,
}

/// Candidates for one turn; a board has at most 9 empty cells.
pub type Candidates = ArrayVec<Candidate, { Board::LEN }>;

/// Generates and selects candidate moves for one mark.
#[derive(Debug)]
pub struct TurnEvaluator<'a, E>
where
    E: PlacementEvaluator + ?Sized,
{
    placement_evaluator: &'a E,
    mark: Mark,
}

impl<'a, E> TurnEvaluator<'a, E>
where
    E: PlacementEvaluator + ?Sized,
{
    #[must_use]
    pub fn new(placement_evaluator: &'a E, mark: Mark) -> Self {
        Self {
            placement_evaluator,
            mark,
        }
    }

    /// Builds one scored candidate per index, in the given order.
    ///
    /// Taken, out-of-range and repeated indices are rejected. `board` itself is never modified.
    pub fn generate_candidates(
        &self,
        board: &Board,
        empty_indices: &[usize],
    ) -> Result<Candidates, ChooseMoveError> {
        let mut candidates = Candidates::new();
        for &index in empty_indices {
            if candidates.iter().any(|candidate| candidate.index == index) {
                return Err(ChooseMoveError::InvalidIndex(PlaceError::Occupied { index }));
            }
            let next = board
                .with_placed(index, self.mark)
                .map_err(ChooseMoveError::InvalidIndex)?;
            let score = self.placement_evaluator.evaluate_placement(&next);
            tracing::debug!(index, score, board = %next, "candidate");
            // distinct in-range cells never exceed the capacity
            candidates
                .try_push(Candidate {
                    board: next,
                    score,
                    index,
                })
                .map_err(|_| ChooseMoveError::InvalidIndex(PlaceError::Occupied { index }))?;
        }
        Ok(candidates)
    }

    /// Generates the candidates for `empty_indices` and returns the best one.
    pub fn select_best_turn(
        &self,
        board: &Board,
        empty_indices: &[usize],
    ) -> Result<Candidate, ChooseMoveError> {
        if empty_indices.is_empty() {
            return Err(ChooseMoveError::NoEmptyCell);
        }
        let candidates = self.generate_candidates(board, empty_indices)?;
        select_best(&candidates).ok_or(ChooseMoveError::NoEmptyCell)
    }
}

/// Returns the first candidate whose score strictly exceeds all earlier ones.
///
/// A NaN score never replaces the current best, and a NaN best is replaced by the next
/// comparable score. If every score is NaN the first candidate is returned. Returns `None` only
/// for an empty slice.
#[must_use]
pub fn select_best(candidates: &[Candidate]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        match best {
            Some(b) if candidate.score <= b.score || candidate.score.is_nan() => {}
            _ => best = Some(*candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use crate::placement_evaluator::Weights;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_candidates_follow_index_order() {
        let b = board("X...O....");
        let turn_evaluator = TurnEvaluator::new(&Weights::INITIAL, Mark::X);
        let candidates = turn_evaluator
            .generate_candidates(&b, &b.empty_indices())
            .unwrap();
        let indices: Vec<_> = candidates.iter().map(|c| c.index).collect();
        assert_eq!(indices, [1, 2, 3, 5, 6, 7, 8]);
        for c in &candidates {
            assert_eq!(c.board[c.index], Some(Mark::X));
            assert_eq!(c.board.count(Mark::X), 2);
        }
        assert_eq!(b, board("X...O...."));
    }

    #[test]
    fn test_invalid_indices_are_rejected() {
        let b = board("X...O....");
        let turn_evaluator = TurnEvaluator::new(&Weights::INITIAL, Mark::X);
        assert_eq!(
            turn_evaluator.generate_candidates(&b, &[1, 4]),
            Err(ChooseMoveError::InvalidIndex(PlaceError::Occupied { index: 4 }))
        );
        assert_eq!(
            turn_evaluator.generate_candidates(&b, &[9]),
            Err(ChooseMoveError::InvalidIndex(PlaceError::OutOfRange { index: 9 }))
        );
        assert_eq!(
            turn_evaluator.generate_candidates(&b, &[1, 1]),
            Err(ChooseMoveError::InvalidIndex(PlaceError::Occupied { index: 1 }))
        );
        assert_eq!(
            turn_evaluator.select_best_turn(&b, &[]),
            Err(ChooseMoveError::NoEmptyCell)
        );
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // every cell scores 1.0 with the initial weights (w2 = 0)
        let turn_evaluator = TurnEvaluator::new(&Weights::INITIAL, Mark::X);
        let best = turn_evaluator
            .select_best_turn(&Board::EMPTY, &Board::EMPTY.empty_indices())
            .unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 1.0);

        let best = turn_evaluator
            .select_best_turn(&Board::EMPTY, &[7, 3, 5])
            .unwrap();
        assert_eq!(best.index, 7);
    }

    #[test]
    fn test_center_wins_with_positive_center_weight() {
        let weights = Weights::new(1.0, 1.0, 0.5);
        let turn_evaluator = TurnEvaluator::new(&weights, Mark::X);
        let best = turn_evaluator
            .select_best_turn(&Board::EMPTY, &Board::EMPTY.empty_indices())
            .unwrap();
        assert_eq!(best.index, 4);
        assert_eq!(best.score, 1.5);
    }

    #[test]
    fn test_negative_threat_weight_blocks_opponent() {
        // O threatens 0-1-2; with w1 < 0 the blocking cell 2 removes the threat
        let weights = Weights::new(0.0, -1.0, 0.0);
        let b = board("OO./.X./...");
        let turn_evaluator = TurnEvaluator::new(&weights, Mark::X);
        let best = turn_evaluator
            .select_best_turn(&b, &b.empty_indices())
            .unwrap();
        assert_eq!(best.index, 2);
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let weights = Weights::new(0.3, -0.7, 0.2);
        let b = board("O.X/.O./...");
        let turn_evaluator = TurnEvaluator::new(&weights, Mark::X);
        let first = turn_evaluator.select_best_turn(&b, &b.empty_indices());
        let second = turn_evaluator.select_best_turn(&b, &b.empty_indices());
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_best_with_nan_scores() {
        let make = |index, score| Candidate {
            board: Board::EMPTY,
            score,
            index,
        };
        assert_eq!(select_best(&[]), None);
        let best = select_best(&[make(0, 1.0), make(1, f64::NAN), make(2, 2.0), make(3, 2.0)]);
        assert_eq!(best.map(|c| c.index), Some(2));
        let best = select_best(&[make(0, f64::NAN), make(1, -1.0), make(2, f64::NAN)]);
        assert_eq!(best.map(|c| c.index), Some(1));
        let best = select_best(&[make(0, f64::NAN), make(1, f64::NAN)]);
        assert_eq!(best.map(|c| c.index), Some(0));
    }
}
