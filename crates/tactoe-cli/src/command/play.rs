use std::path::PathBuf;

use tactoe_engine::{Board, outcome::Outcome};
use tactoe_training::match_play::{self, Seat};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Model of the competitor moving first (random weights if omitted)
    #[arg(long)]
    first: Option<PathBuf>,
    /// Model of the competitor moving second (random weights if omitted)
    #[arg(long)]
    second: Option<PathBuf>,
    /// Seed for random competitors
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let (mut rng, seed) = util::seeded_rng(arg.seed);
    let (first_name, first) = util::load_or_random_competitor(arg.first.as_deref(), &mut rng)?;
    let (second_name, second) = util::load_or_random_competitor(arg.second.as_deref(), &mut rng)?;
    if arg.first.is_none() || arg.second.is_none() {
        eprintln!("Seed: {seed}");
    }

    println!(
        "{} ({}): {:?}",
        Seat::First.mark(),
        first_name,
        first.weights().as_array()
    );
    println!(
        "{} ({}): {:?}",
        Seat::Second.mark(),
        second_name,
        second.weights().as_array()
    );

    let record = match_play::play_match(&first, &second)?;

    let mut board = Board::EMPTY;
    let mut seat = Seat::First;
    for (turn, position) in record.moves.iter().enumerate() {
        board.place(*position, seat.mark())?;
        println!();
        println!("Move {}: {} at {position}", turn + 1, seat.mark());
        println!("{board}");
        seat = seat.other();
    }

    println!();
    match record.outcome {
        Outcome::Win(mark) => {
            let name = match Seat::of_mark(mark) {
                Seat::First => &first_name,
                Seat::Second => &second_name,
            };
            println!("{mark} ({name}) wins after {} moves", record.moves.len());
        }
        Outcome::Draw => println!("Draw"),
    }

    Ok(())
}
