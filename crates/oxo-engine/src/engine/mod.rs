//! Game flow on top of the [`core`](crate::core) board types.
//!
//! - [`GameSession`] - A single game with its move history and time travel
//! - [`Player`] - Anything that picks a cell for its mark (a human front end, the learning AI,
//!   a random opponent)
//! - [`Match`] - Turn-driven controller that plays two [`Player`]s against each other
//! - [`GameStats`] - Win/draw tallies across games
//!
//! # Game Flow
//!
//! Control is an explicit loop rather than a chain of callbacks:
//!
//! 1. Check the current board for a winner or a draw
//! 2. If the game is still in progress, ask the player holding the next mark for a cell
//! 3. Place the mark and go back to 1
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Mark, Match, Outcome, Player, PlayerError};
//!
//! /// Always takes the lowest free cell.
//! #[derive(Debug)]
//! struct FirstEmpty(Mark);
//!
//! impl Player for FirstEmpty {
//!     fn mark(&self) -> Mark {
//!         self.0
//!     }
//!
//!     fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
//!         board.empty_indices().first().copied().ok_or(PlayerError::NoEmptyCell)
//!     }
//! }
//!
//! let record = Match::new(FirstEmpty(Mark::X), FirstEmpty(Mark::O)).play().unwrap();
//! // X takes 0, 2, 4, 6 and completes the 2-4-6 diagonal
//! assert_eq!(record.moves, [0, 1, 2, 3, 4, 5, 6]);
//! assert_eq!(record.outcome, Outcome::Won(Mark::X));
//! ```

pub use self::{game_match::*, game_session::*, game_stats::*};

mod game_match;
mod game_session;
mod game_stats;
