//! Board, rules and turn control for tic-tac-toe.
//!
//! - [`core`] - Marks, the 3×3 [`Board`], the winning [`Line`] table and outcome detection
//! - [`engine`] - Multi-move state: [`GameSession`] with history, [`Match`] driving two
//!   [`Player`]s, and [`GameStats`] tallies

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a mark cannot be placed on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    #[display("cell index {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },
    #[display("cell {index} is already occupied")]
    Occupied { index: usize },
    #[display("game is already over")]
    GameOver,
}

/// Error returned by [`GameSession::jump_to`] for a step that is not in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("step {step} is not in the history (last step is {last})")]
pub struct StepOutOfRangeError {
    pub step: usize,
    pub last: usize,
}
