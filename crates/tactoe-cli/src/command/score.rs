use std::path::PathBuf;

use anyhow::Context;
use tactoe_engine::{Board, outcome};
use tactoe_evaluator::{board_feature::BoardFeature, competitor::Competitor};
use tactoe_training::match_play;

use crate::model::competitor_model::CompetitorModel;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Board as 9 row-major characters (X, O and . for empty)
    board: Board,
    /// Model file providing the weights
    #[arg(long, conflicts_with = "weights")]
    model: Option<PathBuf>,
    /// Comma-separated weights in feature order
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        required_unless_present = "model"
    )]
    weights: Vec<f32>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let competitor = match &arg.model {
        Some(path) => CompetitorModel::open(path)?
            .to_competitor()
            .with_context(|| format!("Invalid competitor model: {}", path.display()))?,
        None => Competitor::from_slice(&arg.weights, 0)?,
    };

    let board = arg.board;
    if outcome::is_terminal(&board) {
        anyhow::bail!("Board {} is already finished", board.to_notation());
    }
    let mark = match_play::seat_to_move(&board).mark();

    println!("{board}");
    println!();
    println!("{mark} to move");
    println!("Features:");
    for feature in BoardFeature::ALL {
        println!(
            "  {:<30} ({}) weight {:>7.2}",
            feature.name(),
            feature.id(),
            competitor.weights()[feature]
        );
    }
    if competitor.has_lost_from(&board) {
        println!("(this competitor has lost from this position before)");
    }
    println!();

    let scored = competitor.score_moves(&board, mark);
    let best = competitor.best_move(&board, mark)?;
    println!("Move      Score    Feature values");
    for scored_move in &scored {
        let marker = if scored_move.position == best { "*" } else { " " };
        println!(
            "{marker}{:<8} {:>7.2}  {:?}",
            scored_move.position.to_string(),
            scored_move.score,
            competitor.feature_values(&scored_move.board, mark),
        );
    }

    Ok(())
}
