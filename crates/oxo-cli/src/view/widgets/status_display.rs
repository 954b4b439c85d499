use std::iter;

use oxo_engine::{GameSession, GameStats, Mark, Outcome};
use oxo_training::learner::Learner;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Everything the status panel reads from.
#[derive(Debug, Clone, Copy)]
pub struct StatusSource<'a> {
    pub session: &'a GameSession,
    pub learner: &'a Learner,
    pub stats: &'a GameStats,
}

#[derive(Debug)]
pub struct StatusDisplay<'a> {
    source: StatusSource<'a>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(source: StatusSource<'a>) -> Self {
        Self {
            source,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = &'static dyn Fn(&StatusSource<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullValue(Value),
    LabelValue(&'static str, Value),
}

pub fn status_text(session: &GameSession) -> String {
    match session.outcome() {
        Outcome::Won(mark) => format!("Winner: {mark}"),
        Outcome::Draw => "Draw".to_owned(),
        Outcome::InProgress => format!("Next player: {}", session.next_mark()),
    }
}

const ROWS: &[Row] = &[
    Row::FullValue(&|source| status_text(source.session)),
    Row::LabelValue("STEP:", &|source| {
        format!("{}/{}", source.session.step(), source.session.last_step())
    }),
    Row::Empty,
    Row::LabelValue("w0 (bias):", &|source| {
        format!("{:.3}", source.learner.weights().bias)
    }),
    Row::LabelValue("w1 (threat):", &|source| {
        format!("{:.3}", source.learner.weights().threat)
    }),
    Row::LabelValue("w2 (center):", &|source| {
        format!("{:.3}", source.learner.weights().center)
    }),
    Row::LabelValue("ITERATION:", &|source| source.learner.iteration().to_string()),
    Row::Empty,
    Row::LabelValue("X WINS:", &|source| source.stats.wins(Mark::X).to_string()),
    Row::LabelValue("O WINS:", &|source| source.stats.wins(Mark::O).to_string()),
    Row::LabelValue("DRAWS:", &|source| source.stats.draws().to_string()),
];

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullValue(value) => {
                    Line::styled(value(&self.source), style::DEFAULT)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::DIM)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self.source), style::DEFAULT)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
