use clap::{Parser, Subcommand};

use self::{normalize::NormalizeArg, play::PlayArg, score::ScoreArg, train::TrainArg};

mod normalize;
mod play;
mod score;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve competitors with a round-robin genetic tournament
    Train(#[clap(flatten)] TrainArg),
    /// Play one greedy match between two competitors
    Play(#[clap(flatten)] PlayArg),
    /// Print a board together with its canonical form
    Normalize(#[clap(flatten)] NormalizeArg),
    /// Print the score of every legal move on a board
    Score(#[clap(flatten)] ScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Train(arg) => train::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Normalize(arg) => normalize::run(&arg),
        Mode::Score(arg) => score::run(&arg)?,
    }
    Ok(())
}
