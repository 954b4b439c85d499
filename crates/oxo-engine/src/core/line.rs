use super::{board::Board, mark::Mark};

/// A row, column or diagonal of three cells.
///
/// Owning all three cells of a line with the same mark wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line([usize; 3]);

impl Line {
    /// All 8 winning lines: rows top to bottom, columns left to right, then the two diagonals.
    pub const ALL: [Self; 8] = [
        Self([0, 1, 2]),
        Self([3, 4, 5]),
        Self([6, 7, 8]),
        Self([0, 3, 6]),
        Self([1, 4, 7]),
        Self([2, 5, 8]),
        Self([0, 4, 8]),
        Self([2, 4, 6]),
    ];

    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Returns the contents of the line's cells on `board`.
    #[must_use]
    pub fn cells(self, board: &Board) -> [Option<Mark>; 3] {
        self.0.map(|i| board[i])
    }

    /// Returns the mark holding all three cells, if any.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        match self.cells(board) {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        }
    }

    /// Counts the cells holding `mark` and the empty cells.
    #[must_use]
    pub fn count(self, board: &Board, mark: Mark) -> (usize, usize) {
        self.cells(board)
            .into_iter()
            .fold((0, 0), |(marks, empties), cell| match cell {
                Some(m) if m == mark => (marks + 1, empties),
                Some(_) => (marks, empties),
                None => (marks, empties + 1),
            })
    }
}
