use oxo_engine::{Board, Line, Mark};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line as TextLine,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// The 3×3 grid. Empty cells show the digit key that selects them.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            block: None,
        }
    }

    pub fn cursor(self, index: usize) -> Self {
        Self {
            cursor: Some(index),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        3 * CELL_WIDTH + 2 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        3 * CELL_HEIGHT + 2 + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_style(&self, index: usize, winning: Option<Line>) -> Style {
        let mut cell_style = match self.board[index] {
            Some(Mark::X) => style::X_MARK,
            Some(Mark::O) => style::O_MARK,
            None => style::DIM,
        };
        if winning.is_some_and(|line| line.indices().contains(&index)) {
            cell_style = cell_style.patch(style::WINNING);
        }
        if self.cursor == Some(index) {
            cell_style = cell_style.patch(style::CURSOR);
        }
        cell_style
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let winning = Line::ALL
            .into_iter()
            .find(|line| line.owner(self.board).is_some());

        let row_constraints = [
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ];
        let col_constraints = [
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ];
        let rows = Layout::vertical(row_constraints).split(area);
        for (r, row_area) in rows.iter().enumerate() {
            let cols = Layout::horizontal(col_constraints).split(*row_area);
            for (c, cell_area) in cols.iter().enumerate() {
                match (r % 2, c % 2) {
                    (0, 0) => {
                        let index = (r / 2) * 3 + c / 2;
                        self.render_cell(index, winning, *cell_area, buf);
                    }
                    (1, 1) => TextLine::styled("┼", style::DIM).render(*cell_area, buf),
                    (1, _) => TextLine::styled("─".repeat(usize::from(cell_area.width)), style::DIM)
                        .render(*cell_area, buf),
                    _ => {
                        for y in cell_area.top()..cell_area.bottom() {
                            buf.set_string(cell_area.x, y, "│", style::DIM);
                        }
                    }
                }
            }
        }
    }
}

impl BoardDisplay<'_> {
    fn render_cell(&self, index: usize, winning: Option<Line>, area: Rect, buf: &mut Buffer) {
        let cell_style = self.cell_style(index, winning);
        buf.set_style(area, cell_style);
        let label = match self.board[index] {
            Some(mark) => mark.as_char().to_string(),
            None => (index + 1).to_string(),
        };
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        TextLine::styled(label, cell_style)
            .centered()
            .render(middle, buf);
    }
}
