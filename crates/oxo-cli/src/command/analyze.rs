use oxo_engine::{Board, Mark, Outcome};
use oxo_evaluator::{
    board_feature::{ALL_BOARD_FEATURES, BoardFeatures},
    placement_evaluator::{PlacementEvaluator as _, Weights},
    turn_evaluator::{self, TurnEvaluator},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Board as 9 cells in row-major order, e.g. `OO./.X./...` (`.`, `_` or `-` for empty)
    board: Board,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg { board } = arg;
    let weights = Weights::INITIAL;

    println!("Board:");
    for row in board.rows() {
        let row = row
            .iter()
            .map(|cell| cell.map_or('.', Mark::as_char))
            .collect::<String>();
        println!("  {row}");
    }
    println!("Outcome: {}", outcome_label(board));

    println!("Features:");
    let features = BoardFeatures::extract(board);
    for (source, value) in ALL_BOARD_FEATURES.iter().zip(features.to_array()) {
        println!("  {:<10} {:<24} {value:>3}", source.id(), source.name());
    }
    println!("Weights: {weights}");
    println!("Value: {}", weights.evaluate_placement(board));

    if board.outcome().is_terminal() {
        return Ok(());
    }

    println!("Candidates for {}:", Mark::X);
    let evaluator = TurnEvaluator::new(&weights, Mark::X);
    let candidates = evaluator.generate_candidates(board, &board.empty_indices())?;
    for candidate in &candidates {
        println!(
            "  {}  [{}]  {}",
            candidate.index, candidate.board, candidate.score
        );
    }
    if let Some(best) = turn_evaluator::select_best(&candidates) {
        println!("Selected: {}", best.index);
    }

    Ok(())
}

fn outcome_label(board: &Board) -> String {
    match board.outcome() {
        Outcome::InProgress => format!("in progress, {} to move", board.next_mark()),
        Outcome::Won(mark) => format!("{mark} wins"),
        Outcome::Draw => "draw".to_owned(),
    }
}
