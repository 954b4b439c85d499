use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, play::PlayArg, self_play::SelfPlayArg};
use crate::logging::{self, LogTarget};

mod analyze;
mod play;
mod self_play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Minimum level of log events to record
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,
    /// Write log events to this file instead of stderr (the only log sink for `play`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play O against the learning AI in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Let the learning AI play many games against a random opponent
    SelfPlay(#[clap(flatten)] SelfPlayArg),
    /// Show features, candidate scores and the chosen move for a board
    Analyze(#[clap(flatten)] AnalyzeArg),
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs {
        log_level,
        log_file,
        mode,
    } = CommandArgs::parse();
    let mode = mode.unwrap_or(Mode::Play(PlayArg::default()));

    // the TUI owns the terminal, so it only logs when a file is given
    let target = match (log_file, &mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Play(_)) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_level, &target)?;

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
        Mode::Analyze(arg) => analyze::run(&arg)?,
    }
    Ok(())
}
