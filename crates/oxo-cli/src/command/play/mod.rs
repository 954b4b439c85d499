use crossterm::event;
use oxo_engine::Mark;

use self::screen::PlayScreen;

mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {}

pub(crate) fn run(_arg: &PlayArg) -> anyhow::Result<()> {
    let mut screen = PlayScreen::new();
    ratatui::run(|terminal| -> anyhow::Result<()> {
        while !screen.is_exiting() {
            terminal.draw(|frame| screen.draw(frame))?;
            let event = event::read()?;
            screen.handle_event(&event);
        }
        Ok(())
    })?;

    let stats = screen.stats();
    tracing::info!(
        x_wins = stats.wins(Mark::X),
        o_wins = stats.wins(Mark::O),
        draws = stats.draws(),
        "play session finished"
    );
    Ok(())
}
