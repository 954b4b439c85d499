use std::path::PathBuf;

use chrono::Utc;
use oxo_engine::Mark;
use oxo_training::self_play::SelfPlay;

use crate::{schema::report::SelfPlayReport, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Seed of the random opponent (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg {
        games,
        seed,
        output,
    } = arg;
    let seed = seed.unwrap_or_else(rand::random);

    eprintln!("Playing {games} games (seed {seed})...");
    let mut self_play = SelfPlay::new(seed);
    let summaries = self_play.play_games(*games, |summary| {
        eprintln!(
            "  Game #{:<4} {:>10}  [{}]  {}",
            summary.game,
            outcome_label(summary.record.outcome.winner()),
            summary.record.final_board,
            summary.weights,
        );
    })?;

    let stats = self_play.stats().clone();
    let learner = self_play.ai().learner();
    eprintln!("Results:");
    eprintln!("  X wins: {}", stats.wins(Mark::X));
    eprintln!("  O wins: {}", stats.wins(Mark::O));
    eprintln!("  Draws:  {}", stats.draws());
    eprintln!("Final weights: {}", learner.weights());
    if !learner.weights().is_finite() {
        eprintln!("Warning: weights are no longer finite");
    }

    let report = SelfPlayReport {
        played_at: Utc::now(),
        seed,
        games: *games,
        params: *learner.params(),
        stats,
        final_weights: *learner.weights(),
        iteration: learner.iteration(),
        weights_finite: learner.weights().is_finite(),
        summaries,
    };
    Output::save_json(&report, output.clone())?;

    Ok(())
}

fn outcome_label(winner: Option<Mark>) -> &'static str {
    match winner {
        Some(Mark::X) => "X wins",
        Some(Mark::O) => "O wins",
        None => "draw",
    }
}
