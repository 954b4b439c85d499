use crossterm::event::{Event, KeyCode};
use oxo_engine::{Board, GameSession, GameStats, Mark};
use oxo_training::player::AiPlayer;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Block as BlockWidget,
};

use crate::view::widgets::{
    BoardDisplay, KeyBinding, KeyBindingDisplay, MoveListDisplay, StatusDisplay, StatusSource,
    style,
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["1-9"], "Place"),
    (&["←↑↓→", "Enter"], "Select"),
    (&["[", "]"], "History"),
    (&["n"], "New game"),
    (&["q"], "Quit"),
];

/// A human (O) against the learning AI (X).
///
/// The AI opens every game and answers each human move. Its weights survive `n`.
#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    ai: AiPlayer,
    stats: GameStats,
    // the current game has already been counted in `stats`
    tallied: bool,
    cursor: usize,
    notice: Option<String>,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            session: GameSession::new(),
            ai: AiPlayer::new(Mark::X),
            stats: GameStats::new(),
            tallied: false,
            cursor: Board::CENTER,
            notice: None,
            is_exiting: false,
        };
        screen.ai_turn();
        screen
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let board_display = BoardDisplay::new(self.session.board())
            .cursor(self.cursor)
            .block(BlockWidget::bordered().title(" oxo "));
        let status_display = StatusDisplay::new(StatusSource {
            session: &self.session,
            learner: self.ai.learner(),
            stats: &self.stats,
        })
        .block(BlockWidget::bordered().title(" Status "));
        let move_list = MoveListDisplay::new(&self.session)
            .block(BlockWidget::bordered().title(" Moves "));
        let notice = Line::styled(self.notice.as_deref().unwrap_or_default(), style::NOTICE)
            .centered();
        let help = KeyBindingDisplay::new(KEY_BINDINGS);

        let [main_area, notice_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [board_area, side_area] = Layout::horizontal([
            Constraint::Length(board_display.width()),
            Constraint::Length(30),
        ])
        .areas(main_area);
        let [board_area, _] =
            Layout::vertical([Constraint::Length(board_display.height()), Constraint::Fill(1)])
                .areas(board_area);
        let [status_area, moves_area] = Layout::vertical([
            Constraint::Length(status_display.height()),
            Constraint::Fill(1),
        ])
        .areas(side_area);

        frame.render_widget(board_display, board_area);
        frame.render_widget(status_display, status_area);
        frame.render_widget(move_list, moves_area);
        frame.render_widget(notice, notice_area);
        frame.render_widget(help, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        if !event.is_press() {
            return;
        }
        self.notice = None;
        match event.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.human_turn(index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_turn(self.cursor),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Char('[') => self.jump_by(-1),
            KeyCode::Char(']') => self.jump_by(1),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.cursor / 3).saturating_add_signed(d_row).min(2);
        let col = (self.cursor % 3).saturating_add_signed(d_col).min(2);
        self.cursor = row * 3 + col;
    }

    fn jump_by(&mut self, delta: isize) {
        let Some(step) = self.session.step().checked_add_signed(delta) else {
            return;
        };
        // out-of-range steps just leave the view where it is
        let _ = self.session.jump_to(step);
    }

    fn new_game(&mut self) {
        self.session = GameSession::new();
        self.tallied = false;
        self.cursor = Board::CENTER;
        self.ai_turn();
    }

    fn human_turn(&mut self, index: usize) {
        if self.session.outcome().is_terminal() {
            self.notice = Some("Game is over, press n for a new game".to_owned());
            return;
        }
        // resuming from a past position where X is to move
        if self.session.next_mark() == Mark::X {
            self.ai_turn();
            if self.session.outcome().is_terminal() {
                return;
            }
        }
        if let Err(err) = self.session.place(index) {
            self.notice = Some(capitalize(&err.to_string()));
            return;
        }
        self.after_move();
        if !self.session.outcome().is_terminal() {
            self.ai_turn();
        }
    }

    fn ai_turn(&mut self) {
        match self.session.play_turn(&mut self.ai) {
            Ok(index) => {
                tracing::debug!(index, board = %self.session.board(), "AI moved");
                self.after_move();
            }
            Err(err) => {
                tracing::warn!(%err, "AI could not move");
                self.notice = Some(capitalize(&err.to_string()));
            }
        }
    }

    fn after_move(&mut self) {
        let outcome = self.session.outcome();
        if outcome.is_terminal() && !self.tallied {
            self.stats.record(outcome);
            self.tallied = true;
            tracing::info!(?outcome, "game finished");
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use oxo_engine::Outcome;
    use oxo_evaluator::placement_evaluator::Weights;

    use super::*;

    fn press(screen: &mut PlayScreen, code: KeyCode) {
        screen.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_ai_opens_the_game() {
        let screen = PlayScreen::new();
        // every cell ties under the initial weights
        assert_eq!(screen.session.moves(), &[0]);
        assert_eq!(screen.session.next_mark(), Mark::O);
        assert_eq!(screen.ai.learner().iteration(), 1);
    }

    #[test]
    fn test_human_move_is_answered() {
        let mut screen = PlayScreen::new();
        press(&mut screen, KeyCode::Char('5'));
        assert_eq!(&screen.session.moves()[..2], &[0, 4]);
        assert_eq!(screen.session.moves().len(), 3);
        assert_eq!(screen.session.next_mark(), Mark::O);
        assert!(screen.notice.is_none());
    }

    #[test]
    fn test_occupied_cell_shows_notice() {
        let mut screen = PlayScreen::new();
        press(&mut screen, KeyCode::Char('1'));
        assert_eq!(screen.session.moves(), &[0]);
        assert_eq!(screen.notice.as_deref(), Some("Cell 0 is already occupied"));

        // any later key clears it
        press(&mut screen, KeyCode::Left);
        assert!(screen.notice.is_none());
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        let mut screen = PlayScreen::new();
        assert_eq!(screen.cursor, 4);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.cursor, 1);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.cursor, 2);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.cursor, 4);

        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session.board()[4], Some(Mark::O));
    }

    #[test]
    fn test_history_navigation() {
        let mut screen = PlayScreen::new();
        press(&mut screen, KeyCode::Char('5'));
        let last = screen.session.last_step();
        press(&mut screen, KeyCode::Char('['));
        assert_eq!(screen.session.step(), last - 1);
        press(&mut screen, KeyCode::Char(']'));
        press(&mut screen, KeyCode::Char(']'));
        assert_eq!(screen.session.step(), last);
        for _ in 0..10 {
            press(&mut screen, KeyCode::Char('['));
        }
        assert_eq!(screen.session.step(), 0);

        // X is to move at the start, so the AI moves before the human's cell is placed
        press(&mut screen, KeyCode::Char('9'));
        assert_eq!(screen.session.board()[8], Some(Mark::O));
        assert_eq!(screen.session.board().count(Mark::X), 2);
        assert!(!screen.session.is_viewing_past());
    }

    #[test]
    fn test_finished_game_is_tallied_once() {
        let mut screen = PlayScreen::new();
        // O never blocks, so X completes the top row
        for key in ['9', '8', '7', '6'] {
            if screen.session.outcome().is_terminal() {
                break;
            }
            press(&mut screen, KeyCode::Char(key));
        }
        assert_eq!(screen.session.outcome(), Outcome::Won(Mark::X));
        assert_eq!(screen.stats.games(), 1);

        press(&mut screen, KeyCode::Char('['));
        press(&mut screen, KeyCode::Char(']'));
        press(&mut screen, KeyCode::Char('1'));
        assert_eq!(screen.stats.games(), 1);

        let iteration = screen.ai.learner().iteration();
        press(&mut screen, KeyCode::Char('n'));
        assert_eq!(screen.session.moves().len(), 1);
        assert!(screen.ai.learner().iteration() > iteration);
        assert_ne!(*screen.ai.learner().weights(), Weights::INITIAL);
    }

    #[test]
    fn test_quit() {
        let mut screen = PlayScreen::new();
        press(&mut screen, KeyCode::Char('q'));
        assert!(screen.is_exiting());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no empty cell available"), "No empty cell available");
        assert_eq!(capitalize(""), "");
    }
}
