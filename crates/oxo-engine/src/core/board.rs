use std::{fmt, ops::Index, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PlaceError;

use super::{line::Line, mark::Mark};

/// Error returned when parsing a [`Board`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("invalid cell character {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },
    #[display("expected {} cells, got {len}", Board::LEN)]
    WrongLength { len: usize },
}

/// Result of a board position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Won(mark) => Some(mark),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// A 3×3 tic-tac-toe board.
///
/// Cells are indexed 0–8 in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
///
/// A cell only ever changes from empty to holding a mark. `Board` is `Copy`, so evaluating
/// a hypothetical move never touches the caller's board.
///
/// # Text format
///
/// Boards parse from and print to 9 cell characters (`X`, `O`, `.` for empty). Whitespace,
/// `/` and `|` are ignored when parsing, so `"XO./.X./..O"` and a multi-line grid both work.
///
/// ```
/// use oxo_engine::{Board, Mark, Outcome};
///
/// let board: Board = "XXX/OO./...".parse().unwrap();
/// assert_eq!(board.winner(), Some(Mark::X));
/// assert_eq!(board.outcome(), Outcome::Won(Mark::X));
/// assert_eq!(board.to_string(), "XXXOO....");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; Board::LEN],
}

impl Board {
    pub const LEN: usize = 9;
    pub const CENTER: usize = 4;
    pub const EMPTY: Self = Self {
        cells: [None; Self::LEN],
    };

    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; Self::LEN]) -> Self {
        Self { cells }
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> + '_ {
        self.cells.chunks_exact(3)
    }

    /// Places `mark` on the empty cell `index`.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        match self.cells.get_mut(index) {
            None => Err(PlaceError::OutOfRange { index }),
            Some(Some(_)) => Err(PlaceError::Occupied { index }),
            Some(cell @ None) => {
                *cell = Some(mark);
                Ok(())
            }
        }
    }

    /// Like [`Self::place`], but returns the resulting board and leaves `self` unchanged.
    pub fn with_placed(&self, index: usize, mark: Mark) -> Result<Self, PlaceError> {
        let mut board = *self;
        board.place(index, mark)?;
        Ok(board)
    }

    /// Returns the indices of empty cells in ascending order.
    #[must_use]
    pub fn empty_indices(&self) -> ArrayVec<usize, { Board::LEN }> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the mark owning a complete line, scanning [`Line::ALL`] in order.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        Line::ALL.iter().find_map(|line| line.owner(self))
    }

    /// Classifies the position as won, drawn (full with no winner) or still in progress.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            Outcome::Won(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the mark to move next, assuming X moved first.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

impl Index<usize> for Board {
    type Output = Option<Mark>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            fmt::Write::write_char(f, cell.map_or('.', Mark::as_char))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = ArrayVec::<Option<Mark>, { Board::LEN }>::new();
        let mut len = 0;
        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() || ch == '/' || ch == '|' {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '-' => None,
                _ => Some(Mark::from_char(ch).ok_or(ParseBoardError::InvalidChar { ch, position })?),
            };
            len += 1;
            // keep counting past 9 so the error reports the real length
            let _ = cells.try_push(cell);
        }
        let cells = cells
            .into_inner()
            .map_err(|_| ParseBoardError::WrongLength { len })?;
        if len != Board::LEN {
            return Err(ParseBoardError::WrongLength { len });
        }
        Ok(Self { cells })
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid board {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_formats() {
        let expected = Board::from_cells([
            Some(Mark::X),
            Some(Mark::O),
            None,
            None,
            Some(Mark::X),
            None,
            None,
            None,
            Some(Mark::O),
        ]);
        assert_eq!(board("XO..X...O"), expected);
        assert_eq!(board("XO./.X./..O"), expected);
        assert_eq!(
            board(
                "
                X O .
                . X .
                . . O
                "
            ),
            expected
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidChar {
                ch: '?',
                position: 2
            })
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { len: 2 })
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::WrongLength { len: 10 })
        );
    }

    #[test]
    fn test_place() {
        let mut b = Board::EMPTY;
        assert_eq!(b.place(4, Mark::X), Ok(()));
        assert_eq!(b[4], Some(Mark::X));
        assert_eq!(b.place(4, Mark::O), Err(PlaceError::Occupied { index: 4 }));
        assert_eq!(b.place(9, Mark::O), Err(PlaceError::OutOfRange { index: 9 }));
        assert_eq!(b.count(Mark::X), 1);
    }

    #[test]
    fn test_with_placed_leaves_original_untouched() {
        let original = board("X...O....");
        let next = original.with_placed(8, Mark::X).unwrap();
        assert_eq!(original, board("X...O...."));
        assert_eq!(next, board("X...O...X"));
    }

    #[test]
    fn test_empty_indices() {
        assert_eq!(
            Board::EMPTY.empty_indices().as_slice(),
            &[0, 1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(board("XO.OX.XOX").empty_indices().as_slice(), &[2, 5]);
        assert!(board("XOXXOOOXX").empty_indices().is_empty());
    }

    #[test]
    fn test_outcomes() {
        // (name, board, winner, outcome)
        let test_cases = [
            ("empty", ".........", None, Outcome::InProgress),
            ("row", "XXX/OO./...", Some(Mark::X), Outcome::Won(Mark::X)),
            ("column", "OX./OX./O.X", Some(Mark::O), Outcome::Won(Mark::O)),
            ("diagonal", "X.O/.XO/..X", Some(Mark::X), Outcome::Won(Mark::X)),
            ("anti-diagonal", "XXO/.O./OX.", Some(Mark::O), Outcome::Won(Mark::O)),
            ("draw", "XOX/XOO/OXX", None, Outcome::Draw),
            ("full with winner", "XXX/OOX/XOO", Some(Mark::X), Outcome::Won(Mark::X)),
            ("ongoing", "XO./.../...", None, Outcome::InProgress),
        ];
        for (name, s, winner, outcome) in test_cases {
            let b = s.parse::<Board>().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(b.winner(), winner, "{name}: winner");
            assert_eq!(b.outcome(), outcome, "{name}: outcome");
        }
    }

    #[test]
    fn test_winner_requires_whole_line() {
        // a board reports a mark only when all three cells of some line hold it
        for s in ["XX./.../...", "X.X/.O./O..", "OO./XX./..."] {
            let b = board(s);
            assert_eq!(b.winner(), None, "{s}");
            for line in Line::ALL {
                assert_eq!(line.owner(&b), None, "{s}");
            }
        }
    }

    #[test]
    fn test_winner_is_pure() {
        let b = board("XOX/.X./O.X");
        assert_eq!(b.winner(), b.winner());
        assert_eq!(b.outcome(), b.outcome());
        assert_eq!(b, board("XOX/.X./O.X"));
    }

    #[test]
    fn test_next_mark() {
        assert_eq!(Board::EMPTY.next_mark(), Mark::X);
        assert_eq!(board("X........").next_mark(), Mark::O);
        assert_eq!(board("X...O....").next_mark(), Mark::X);
    }

    #[test]
    fn test_serde_as_string() {
        let b = board("XO./.X./..O");
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"XO..X...O\"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<Board>("\"XO\"").is_err());
    }
}
