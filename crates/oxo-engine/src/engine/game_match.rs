use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    PlaceError,
    core::{Board, Mark, Outcome},
};

use super::game_session::GameSession;

/// Error reported by a [`Player`] that cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayerError {
    #[display("no empty cell available")]
    NoEmptyCell,
    #[display("invalid move: {_0}")]
    InvalidMove(PlaceError),
}

/// Something that picks a cell for its mark.
pub trait Player: fmt::Debug {
    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Chooses an empty cell index on `board`.
    ///
    /// Only called on boards where the game is still in progress and [`mark`](Self::mark) is
    /// the next mark to move.
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError>;
}

impl<P> Player for &mut P
where
    P: Player + ?Sized,
{
    fn mark(&self) -> Mark {
        (**self).mark()
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        (**self).choose_move(board)
    }
}

/// Error that stops a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    #[display("player {mark} failed to move: {source}")]
    Player { mark: Mark, source: PlayerError },
    #[display("player {mark} made an illegal move: {source}")]
    IllegalMove { mark: Mark, source: PlaceError },
    #[display("player {mark} asked to move, but {expected} is next")]
    NotYourTurn { mark: Mark, expected: Mark },
}

/// Moves and result of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub final_board: Board,
    pub outcome: Outcome,
}

/// Plays one game between an X player and an O player.
#[derive(Debug)]
pub struct Match<X, O> {
    x: X,
    o: O,
    session: GameSession,
}

impl<X, O> Match<X, O>
where
    X: Player,
    O: Player,
{
    /// Creates a match starting from the empty board.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not play [`Mark::X`] or `o` does not play [`Mark::O`].
    #[must_use]
    pub fn new(x: X, o: O) -> Self {
        assert_eq!(x.mark(), Mark::X, "first player must play X");
        assert_eq!(o.mark(), Mark::O, "second player must play O");
        Self {
            x,
            o,
            session: GameSession::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays a single ply, returning the placed index, or `None` if the game is already over.
    pub fn step(&mut self) -> Result<Option<usize>, MatchError> {
        if self.session.outcome().is_terminal() {
            return Ok(None);
        }
        let index = match self.session.next_mark() {
            Mark::X => self.session.play_turn(&mut self.x)?,
            Mark::O => self.session.play_turn(&mut self.o)?,
        };
        Ok(Some(index))
    }

    /// Plays until one side wins or the board is full.
    pub fn play(mut self) -> Result<GameRecord, MatchError> {
        while self.step()?.is_some() {}
        Ok(self.session.record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed list of cells, in order.
    #[derive(Debug)]
    struct Scripted {
        mark: Mark,
        cells: Vec<usize>,
    }

    impl Scripted {
        fn new(mark: Mark, cells: &[usize]) -> Self {
            Self {
                mark,
                cells: cells.iter().rev().copied().collect(),
            }
        }
    }

    impl Player for Scripted {
        fn mark(&self) -> Mark {
            self.mark
        }

        fn choose_move(&mut self, _board: &Board) -> Result<usize, PlayerError> {
            self.cells.pop().ok_or(PlayerError::NoEmptyCell)
        }
    }

    #[test]
    fn test_stops_at_win() {
        let x = Scripted::new(Mark::X, &[0, 1, 2, 8]);
        let o = Scripted::new(Mark::O, &[3, 4, 5]);
        let record = Match::new(x, o).play().unwrap();
        assert_eq!(record.moves, [0, 3, 1, 4, 2]);
        assert_eq!(record.outcome, Outcome::Won(Mark::X));
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let x = Scripted::new(Mark::X, &[0, 2, 3, 7, 8]);
        let o = Scripted::new(Mark::O, &[1, 4, 5, 6]);
        let record = Match::new(x, o).play().unwrap();
        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.final_board.to_string(), "XOXXOOOXX");
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let x = Scripted::new(Mark::X, &[0, 0]);
        let o = Scripted::new(Mark::O, &[4]);
        let mut game = Match::new(x, o);
        assert_eq!(game.step(), Ok(Some(0)));
        assert_eq!(game.step(), Ok(Some(4)));
        assert_eq!(
            game.step(),
            Err(MatchError::IllegalMove {
                mark: Mark::X,
                source: PlaceError::Occupied { index: 0 }
            })
        );
        assert_eq!(game.session().last_step(), 2);
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut session = GameSession::new();
        let mut o = Scripted::new(Mark::O, &[4]);
        assert_eq!(
            session.play_turn(&mut o),
            Err(MatchError::NotYourTurn {
                mark: Mark::O,
                expected: Mark::X
            })
        );
    }

    #[test]
    fn test_borrowed_players() {
        let mut x = Scripted::new(Mark::X, &[4, 0, 8]);
        let mut o = Scripted::new(Mark::O, &[1, 2]);
        let record = Match::new(&mut x, &mut o).play().unwrap();
        assert_eq!(record.outcome, Outcome::Won(Mark::X));
        assert!(x.cells.is_empty());
    }
}
