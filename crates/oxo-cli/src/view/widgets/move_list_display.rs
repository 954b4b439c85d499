use oxo_engine::{GameSession, Mark};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Numbered list of moves. The row of the viewed step is highlighted.
#[derive(Debug)]
pub struct MoveListDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> MoveListDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let step = self.session.step();
        let start = Line::styled(
            "   Game start",
            if step == 0 { style::CURSOR } else { style::DEFAULT },
        );
        let moves = self.session.moves().iter().enumerate().map(|(i, index)| {
            // X always opens, so even plies are X
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            let row = index / 3 + 1;
            let col = index % 3 + 1;
            let text = format!("{:>2}. {mark} at ({row}, {col})", i + 1);
            let line_style = if i + 1 == step {
                style::CURSOR
            } else if i + 1 > step {
                style::DIM
            } else {
                style::DEFAULT
            };
            Line::styled(text, line_style)
        });
        std::iter::once(start).chain(moves).collect()
    }
}

impl Widget for MoveListDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Text::from(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_moves_with_coordinates() {
        let mut session = GameSession::new();
        session.place(4).unwrap();
        session.place(0).unwrap();
        let lines = MoveListDisplay::new(&session).lines();
        let texts = lines.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            texts,
            ["   Game start", " 1. X at (2, 2)", " 2. O at (1, 1)"]
        );
        assert_eq!(lines[2].style, style::CURSOR);

        session.jump_to(1).unwrap();
        let lines = MoveListDisplay::new(&session).lines();
        assert_eq!(lines[1].style, style::CURSOR);
        assert_eq!(lines[2].style, style::DIM);
    }
}
