use crate::{
    PlaceError, StepOutOfRangeError,
    core::{Board, Mark, Outcome},
};

use super::game_match::{GameRecord, MatchError, Player};

/// A single game together with every position it passed through.
///
/// The history starts at the empty board. [`jump_to`](Self::jump_to) moves the view to an
/// earlier position without discarding anything; the next [`place`](Self::place) from there
/// drops the later positions and continues from the viewed one.
///
/// ```
/// use oxo_engine::{GameSession, Mark};
///
/// let mut session = GameSession::new();
/// session.place(4).unwrap(); // X
/// session.place(0).unwrap(); // O
/// session.place(8).unwrap(); // X
///
/// session.jump_to(1).unwrap();
/// assert_eq!(session.next_mark(), Mark::O);
/// session.place(2).unwrap(); // O again, replacing the old continuation
///
/// assert_eq!(session.moves(), &[4, 2]);
/// assert_eq!(session.last_step(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    history: Vec<Board>,
    moves: Vec<usize>,
    step: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::EMPTY)
    }

    /// Starts a session from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            history: vec![board],
            moves: vec![],
            step: 0,
        }
    }

    /// Returns the board at the currently viewed step.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Cell indices placed so far, in order. `moves()[i]` leads from step `i` to step `i + 1`.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    #[must_use]
    pub fn is_viewing_past(&self) -> bool {
        self.step != self.last_step()
    }

    #[must_use]
    pub fn next_mark(&self) -> Mark {
        self.board().next_mark()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.board().outcome()
    }

    /// Places the next mark on `index` at the viewed step.
    ///
    /// Positions after the viewed step are discarded first.
    pub fn place(&mut self, index: usize) -> Result<(), PlaceError> {
        if self.outcome().is_terminal() {
            return Err(PlaceError::GameOver);
        }
        let next = self.board().with_placed(index, self.next_mark())?;
        self.history.truncate(self.step + 1);
        self.moves.truncate(self.step);
        self.history.push(next);
        self.moves.push(index);
        self.step += 1;
        Ok(())
    }

    /// Views the position after `step` moves (`0` is the starting board).
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRangeError> {
        let last = self.last_step();
        if step > last {
            return Err(StepOutOfRangeError { step, last });
        }
        self.step = step;
        Ok(())
    }

    /// Asks `player` for a move and places it.
    ///
    /// Returns the chosen index. Fails without touching the session if the game is over, it is
    /// not `player`'s turn, the player cannot move, or the chosen cell is illegal.
    pub fn play_turn<P>(&mut self, player: &mut P) -> Result<usize, MatchError>
    where
        P: Player + ?Sized,
    {
        let mark = player.mark();
        if self.outcome().is_terminal() {
            return Err(MatchError::IllegalMove {
                mark,
                source: PlaceError::GameOver,
            });
        }
        let expected = self.next_mark();
        if mark != expected {
            return Err(MatchError::NotYourTurn { mark, expected });
        }
        let index = player
            .choose_move(self.board())
            .map_err(|source| MatchError::Player { mark, source })?;
        self.place(index)
            .map_err(|source| MatchError::IllegalMove { mark, source })?;
        Ok(index)
    }

    /// Summarizes the game up to the viewed step.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        let board = *self.board();
        GameRecord {
            moves: self.moves[..self.step].to_vec(),
            final_board: board,
            outcome: board.outcome(),
        }
    }
}
