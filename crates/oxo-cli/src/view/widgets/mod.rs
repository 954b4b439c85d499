use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, key_binding_display::*, move_list_display::*, status_display::*,
};

mod board_display;
mod key_binding_display;
mod move_list_display;
mod status_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const DEFAULT: Style = Style::new().fg(Color::White);
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const X_MARK: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const O_MARK: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const WINNING: Style = Style::new().fg(Color::Black).bg(Color::Green);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const NOTICE: Style = Style::new().fg(Color::Red);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
